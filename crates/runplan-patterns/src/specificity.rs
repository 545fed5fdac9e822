//! Pattern specificity scoring for disambiguation.
//!
//! When several step patterns match the same step text, the registry picks
//! the most specific one. More specific patterns carry more literal text and
//! fewer placeholders.

use std::cmp::Ordering;

use crate::errors::PatternError;
use crate::lexer::{Token, lex_pattern};

/// Specificity score for a step pattern.
///
/// # Ordering
///
/// Patterns are compared by:
/// 1. More literal characters → more specific
/// 2. Fewer placeholders → more specific
///
/// Ties beyond that are broken by the registry using registration order.
///
/// # Examples
///
/// ```
/// use runplan_patterns::SpecificityScore;
///
/// let literal = SpecificityScore::calculate("a hungry monkey")
///     .expect("valid literal pattern");
/// let generic = SpecificityScore::calculate("a {mood} monkey")
///     .expect("valid generic pattern");
/// assert!(literal > generic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecificityScore {
    /// Total number of literal characters in the pattern.
    pub literal_chars: usize,
    /// Number of placeholders in the pattern.
    pub placeholder_count: usize,
}

impl SpecificityScore {
    /// Calculate the specificity score for a pattern string.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if the pattern contains invalid syntax.
    pub fn calculate(pattern: &str) -> Result<Self, PatternError> {
        let tokens = lex_pattern(pattern)?;

        let mut literal_chars = 0usize;
        let mut placeholder_count = 0usize;

        for token in tokens {
            match token {
                Token::Literal(text) => literal_chars += text.chars().count(),
                Token::Placeholder { .. } => placeholder_count += 1,
                // Stray braces count as literal characters.
                Token::OpenBrace { .. } | Token::CloseBrace { .. } => literal_chars += 1,
            }
        }

        Ok(Self {
            literal_chars,
            placeholder_count,
        })
    }
}

impl Ord for SpecificityScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.literal_chars.cmp(&other.literal_chars) {
            Ordering::Equal => {}
            ord => return ord,
        }

        // Fewer placeholders → more specific (reverse comparison).
        other.placeholder_count.cmp(&self.placeholder_count)
    }
}

impl PartialOrd for SpecificityScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
