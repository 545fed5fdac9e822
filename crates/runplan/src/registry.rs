//! Step registration and lookup.
//!
//! The registry is an explicitly constructed, per-run object: one run builds
//! one registry, reads it during binding, and drops it. Nothing here is
//! process-global, so concurrent runs each construct their own instance
//! (the link-time definition collection lives in [`crate::loader`]).

use hashbrown::HashMap;

use crate::pattern::StepPattern;
use crate::types::{StepFn, StepText};
use runplan_patterns::{PatternError, SpecificityScore, StepKeyword, literal_text};

/// A pattern-matched registry entry.
#[derive(Debug)]
struct PatternEntry {
    pattern: StepPattern,
    run: StepFn,
}

/// The entries registered under one keyword: exact-text lookups plus an
/// ordered list of pattern entries.
#[derive(Debug, Default)]
struct KeywordBucket {
    exact: HashMap<String, StepFn>,
    patterns: Vec<PatternEntry>,
}

/// The lookup table mapping step keyword and text to a registered function.
///
/// Lookup is a two-stage chain: exact text equality first, then compiled
/// pattern entries ranked by specificity (see [`find`](Self::find)).
/// Re-registering the same `(keyword, text)` overwrites the prior entry —
/// last write wins. Entries are never removed during a run.
///
/// # Examples
///
/// ```
/// use runplan::{StepContext, StepRegistry, StepText};
/// use runplan_patterns::StepKeyword;
///
/// fn feed(_: &StepContext<'_>) {}
///
/// let mut registry = StepRegistry::new();
/// registry.register(StepKeyword::Given, "a monkey", feed);
/// assert!(registry.lookup(StepKeyword::Given, StepText::new("a monkey")).is_some());
/// assert!(registry.lookup(StepKeyword::Given, StepText::new("a gorilla")).is_none());
/// ```
#[derive(Debug, Default)]
pub struct StepRegistry {
    buckets: HashMap<StepKeyword, KeywordBucket>,
}

impl StepRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the exact-text entry at `(keyword, text)`.
    ///
    /// Unknown keywords are unrepresentable here: the closed [`StepKeyword`]
    /// enum carries registration, and text-typed call sites must parse
    /// through [`StepKeyword::from_str`](std::str::FromStr), which rejects
    /// typos as a configuration error instead of letting them create an
    /// unreachable bucket.
    pub fn register(&mut self, keyword: StepKeyword, text: impl Into<String>, run: StepFn) {
        let text = text.into();
        let bucket = self.buckets.entry(keyword).or_default();
        if bucket.exact.insert(text.clone(), run).is_some() {
            log::debug!("overwriting step definition for {keyword} '{text}'");
        }
    }

    /// Register a pattern entry at `(keyword, pattern)`.
    ///
    /// Patterns without placeholders collapse into exact-text entries, so
    /// `register_pattern` is safe to use as the single registration path.
    /// The pattern is compiled eagerly: a malformed pattern is a
    /// configuration error at registration time, never a lookup miss later.
    /// Re-registering the same pattern text overwrites the prior function
    /// while keeping the entry's original position in registration order.
    ///
    /// # Errors
    /// Returns [`PatternError`] when the pattern text is malformed.
    pub fn register_pattern(
        &mut self,
        keyword: StepKeyword,
        pattern: impl Into<String>,
        run: StepFn,
    ) -> Result<(), PatternError> {
        let pattern = pattern.into();
        if let Some(text) = literal_text(&pattern)? {
            self.register(keyword, text, run);
            return Ok(());
        }

        let pattern = StepPattern::new(pattern);
        pattern.compile()?;
        let bucket = self.buckets.entry(keyword).or_default();
        match bucket
            .patterns
            .iter_mut()
            .find(|entry| entry.pattern == pattern)
        {
            Some(entry) => {
                log::debug!("overwriting step pattern for {keyword} '{}'", pattern.as_str());
                entry.run = run;
            }
            None => bucket.patterns.push(PatternEntry { pattern, run }),
        }
        Ok(())
    }

    /// Look up a registered step by exact text only.
    ///
    /// A miss is a valid, expected outcome, not an error.
    #[must_use]
    pub fn lookup(&self, keyword: StepKeyword, text: StepText<'_>) -> Option<StepFn> {
        self.buckets
            .get(&keyword)?
            .exact
            .get(text.as_str())
            .copied()
    }

    /// Find a registered step for the given text using the full chain.
    ///
    /// Exact text equality is tried first; when it misses, every pattern
    /// entry under the keyword is tested against the text and the most
    /// specific match wins. Equally specific matches fall back to
    /// registration order, earliest first.
    #[must_use]
    pub fn find(&self, keyword: StepKeyword, text: StepText<'_>) -> Option<StepFn> {
        if let Some(run) = self.lookup(keyword, text) {
            return Some(run);
        }

        let bucket = self.buckets.get(&keyword)?;
        let mut best: Option<(&PatternEntry, SpecificityScore)> = None;
        for entry in &bucket.patterns {
            if !entry.pattern.matches(text.as_str()) {
                continue;
            }
            let score = entry_specificity(entry);
            // Strictly-greater keeps the earliest entry on ties.
            if best.is_none_or(|(_, incumbent)| score > incumbent) {
                best = Some((entry, score));
            }
        }
        best.map(|(entry, _)| entry.run)
    }

    /// Number of registered entries across all keywords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets
            .values()
            .map(|bucket| bucket.exact.len() + bucket.patterns.len())
            .sum()
    }

    /// True when nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compute the specificity score for an entry, logging any errors.
fn entry_specificity(entry: &PatternEntry) -> SpecificityScore {
    entry.pattern.specificity().unwrap_or_else(|err| {
        log::warn!(
            "specificity calculation failed for pattern '{}': {err}",
            entry.pattern.as_str()
        );
        SpecificityScore::default()
    })
}
