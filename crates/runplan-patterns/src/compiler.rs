//! Convert lexed patterns into anchored regular expressions.

use regex::Regex;

use crate::errors::{PatternError, placeholder_error};
use crate::lexer::{Token, lex_pattern};

/// Build an anchored regular-expression source from a pattern string.
///
/// Placeholders compile to a lazy `(.+?)` group: this core only gates
/// matching, so no placeholder typing is needed. Balanced stray braces are
/// kept as literal characters; unbalanced braces are rejected.
///
/// # Errors
/// Returns [`PatternError`] when the pattern contains malformed placeholders
/// or unbalanced braces.
///
/// # Examples
/// ```
/// use runplan_patterns::build_regex_from_pattern;
///
/// let source = build_regex_from_pattern("a {colour} monkey")
///     .expect("pattern is well formed");
/// assert_eq!(source, r"^a (.+?) monkey$");
/// ```
pub fn build_regex_from_pattern(pattern: &str) -> Result<String, PatternError> {
    let tokens = lex_pattern(pattern)?;
    let mut source = String::with_capacity(pattern.len().saturating_mul(2) + 2);
    source.push('^');
    let mut stray_depth = 0usize;

    for token in tokens {
        match token {
            Token::Literal(text) => source.push_str(&regex::escape(&text)),
            Token::Placeholder { .. } => source.push_str("(.+?)"),
            Token::OpenBrace { .. } => {
                stray_depth = stray_depth.saturating_add(1);
                source.push_str(&regex::escape("{"));
            }
            Token::CloseBrace { index } => {
                if stray_depth == 0 {
                    return Err(placeholder_error(
                        "unmatched closing brace '}' in step pattern",
                        index,
                        None,
                    ));
                }
                stray_depth -= 1;
                source.push_str(&regex::escape("}"));
            }
        }
    }

    if stray_depth != 0 {
        return Err(placeholder_error(
            "unbalanced braces in step pattern",
            pattern.len(),
            None,
        ));
    }

    source.push('$');
    Ok(source)
}

/// Compile a pattern string into an anchored [`Regex`].
///
/// # Errors
/// Returns [`PatternError`] when the pattern is malformed or the generated
/// expression fails to compile.
pub fn compile_regex_from_pattern(pattern: &str) -> Result<Regex, PatternError> {
    let source = build_regex_from_pattern(pattern)?;
    Regex::new(&source).map_err(PatternError::Regex)
}

/// Return the unescaped literal text of a pattern with no placeholders.
///
/// A pattern that lexes to plain literal text (after resolving `{{`/`}}` and
/// backslash escapes) can be matched by string equality instead of a regular
/// expression; callers use this to pick the cheaper registry slot.
///
/// # Errors
/// Returns [`PatternError`] when the pattern is malformed.
///
/// # Examples
/// ```
/// use runplan_patterns::literal_text;
///
/// assert_eq!(
///     literal_text("a {{braced}} literal").expect("well formed"),
///     Some("a {braced} literal".to_string()),
/// );
/// assert_eq!(literal_text("a {colour} monkey").expect("well formed"), None);
/// ```
pub fn literal_text(pattern: &str) -> Result<Option<String>, PatternError> {
    let tokens = lex_pattern(pattern)?;
    let mut text = String::with_capacity(pattern.len());
    for token in tokens {
        match token {
            Token::Literal(chunk) => text.push_str(&chunk),
            Token::Placeholder { .. } => return Ok(None),
            // Stray braces force the regex path so balance checking stays in
            // one place.
            Token::OpenBrace { .. } | Token::CloseBrace { .. } => return Ok(None),
        }
    }
    Ok(Some(text))
}
