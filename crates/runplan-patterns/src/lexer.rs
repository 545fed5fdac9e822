//! Pattern lexer converting pattern strings into semantic tokens.
//!
//! The mini-language is deliberately small: literal text, `{name}`
//! placeholders, and doubled braces (`{{`, `}}`) for literal brace
//! characters. A backslash escapes the following character.

use crate::errors::{PatternError, placeholder_error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Literal(String),
    Placeholder { start: usize, name: String },
    OpenBrace { index: usize },
    CloseBrace { index: usize },
}

struct Cursor<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    len: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            len: input.len(),
        }
    }

    fn peek(&mut self) -> Option<(usize, char)> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }

    fn position(&mut self) -> usize {
        self.peek().map_or(self.len, |(index, _)| index)
    }
}

pub(crate) fn lex_pattern(pattern: &str) -> Result<Vec<Token>, PatternError> {
    let mut cursor = Cursor::new(pattern);
    let mut tokens = Vec::new();
    let mut literal = String::new();

    let flush = |literal: &mut String, tokens: &mut Vec<Token>| {
        if !literal.is_empty() {
            tokens.push(Token::Literal(std::mem::take(literal)));
        }
    };

    while let Some((index, ch)) = cursor.bump() {
        match ch {
            '\\' => match cursor.bump() {
                Some((_, next)) => literal.push(next),
                None => literal.push('\\'),
            },
            '{' => {
                if cursor.peek().map(|(_, next)| next) == Some('{') {
                    cursor.bump();
                    literal.push('{');
                    continue;
                }
                match cursor.peek() {
                    Some((_, next)) if next.is_ascii_alphabetic() || next == '_' => {
                        flush(&mut literal, &mut tokens);
                        tokens.push(lex_placeholder(&mut cursor, index)?);
                    }
                    _ => {
                        flush(&mut literal, &mut tokens);
                        tokens.push(Token::OpenBrace { index });
                    }
                }
            }
            '}' => {
                if cursor.peek().map(|(_, next)| next) == Some('}') {
                    cursor.bump();
                    literal.push('}');
                    continue;
                }
                flush(&mut literal, &mut tokens);
                tokens.push(Token::CloseBrace { index });
            }
            other => literal.push(other),
        }
    }

    flush(&mut literal, &mut tokens);
    Ok(tokens)
}

fn lex_placeholder(cursor: &mut Cursor<'_>, start: usize) -> Result<Token, PatternError> {
    let mut name = String::new();
    while let Some((_, ch)) = cursor.peek() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            name.push(ch);
            cursor.bump();
        } else {
            break;
        }
    }
    match cursor.bump() {
        Some((_, '}')) => Ok(Token::Placeholder { start, name }),
        Some((index, _)) => Err(placeholder_error(
            "invalid character in placeholder",
            index,
            Some(name),
        )),
        None => Err(placeholder_error(
            "missing closing '}' for placeholder",
            cursor.position(),
            Some(name),
        )),
    }
}
