//! Error types shared by the pattern parsing modules.

use std::fmt;
use thiserror::Error;

/// Additional context for placeholder-related parsing errors.
///
/// # Examples
/// ```
/// use runplan_patterns::PlaceholderErrorInfo;
/// let info = PlaceholderErrorInfo::new("missing closing '}'", 4, Some("count".into()));
/// assert_eq!(info.placeholder.as_deref(), Some("count"));
/// assert_eq!(info.position, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderErrorInfo {
    /// Static description of what went wrong.
    pub message: &'static str,
    /// Zero-based byte offset into the pattern where parsing failed.
    pub position: usize,
    /// Name of the offending placeholder, when known.
    pub placeholder: Option<String>,
}

impl PlaceholderErrorInfo {
    /// Create a new error description for a placeholder failure.
    #[must_use]
    pub fn new(message: &'static str, position: usize, placeholder: Option<String>) -> Self {
        Self {
            message,
            position,
            placeholder,
        }
    }
}

impl fmt::Display for PlaceholderErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.placeholder {
            Some(name) => write!(
                f,
                "{} for placeholder `{}` at byte {} (zero-based)",
                self.message, name, self.position
            ),
            None => write!(f, "{} at byte {} (zero-based)", self.message, self.position),
        }
    }
}

/// Errors surfaced while converting step patterns into regular expressions.
///
/// # Examples
/// ```
/// use runplan_patterns::{PatternError, PlaceholderErrorInfo};
/// let info = PlaceholderErrorInfo::new("missing closing '}'", 2, Some("n".into()));
/// let err = PatternError::Placeholder(info.clone());
/// assert_eq!(err.to_string(), info.to_string());
/// ```
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern contained a malformed placeholder or unbalanced braces.
    #[error("{0}")]
    Placeholder(PlaceholderErrorInfo),
    /// The generated regular expression failed to compile.
    #[error(transparent)]
    Regex(regex::Error),
}

pub(crate) fn placeholder_error(
    message: &'static str,
    position: usize,
    placeholder: Option<String>,
) -> PatternError {
    PatternError::Placeholder(PlaceholderErrorInfo::new(message, position, placeholder))
}
