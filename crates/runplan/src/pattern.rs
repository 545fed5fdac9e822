//! Step pattern handling and compilation.
//!
//! `StepPattern` wraps a pattern's text together with its lazily compiled
//! regular expression and cached specificity score. The registry compiles
//! patterns eagerly at registration so malformed patterns surface as
//! configuration errors rather than silent lookup misses.

use regex::Regex;
use runplan_patterns::{PatternError, SpecificityScore, compile_regex_from_pattern};
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// Pattern text used to match a step at lookup time.
#[derive(Debug)]
pub struct StepPattern {
    text: String,
    regex: OnceLock<Regex>,
    specificity: OnceLock<SpecificityScore>,
}

// Equality and hashing are by the underlying text, keeping semantics
// independent of compilation state.
impl PartialEq for StepPattern {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for StepPattern {}

impl Hash for StepPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl StepPattern {
    /// Create a new pattern wrapper from its text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            regex: OnceLock::new(),
            specificity: OnceLock::new(),
        }
    }

    /// Access the underlying pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Compile the pattern into a regular expression, caching the result.
    ///
    /// Idempotent and thread-safe; concurrent calls may race to build a
    /// `Regex`, but only the first successful value is cached.
    ///
    /// # Errors
    /// Returns an error if the pattern contains invalid placeholders or the
    /// generated regex fails to compile.
    pub fn compile(&self) -> Result<(), PatternError> {
        if self.regex.get().is_some() {
            return Ok(());
        }
        let regex = compile_regex_from_pattern(&self.text)?;
        let _ = self.regex.set(regex);
        Ok(())
    }

    /// Test whether the compiled pattern matches the given step text.
    ///
    /// Returns false when [`compile`](Self::compile) has not succeeded; the
    /// registry guarantees compilation before any lookup.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.regex.get().is_some_and(|regex| regex.is_match(text))
    }

    /// Calculate and cache the specificity score for this pattern.
    ///
    /// Used to rank patterns when several match the same step text; higher
    /// scores indicate more specific patterns.
    ///
    /// # Errors
    /// Returns [`PatternError`] if the pattern contains invalid syntax.
    pub fn specificity(&self) -> Result<SpecificityScore, PatternError> {
        if let Some(score) = self.specificity.get() {
            return Ok(*score);
        }
        let score = SpecificityScore::calculate(&self.text)?;
        let _ = self.specificity.set(score);
        Ok(score)
    }
}

impl From<&str> for StepPattern {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
