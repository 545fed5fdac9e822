//! Core types shared across the crate.
//!
//! The module defines the tag and text newtypes used by selection and
//! lookup, the step function alias, the binding slot attached to each step,
//! and the fixture context handed to step functions by the executor.

use derive_more::{Deref, From};
use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// An opaque, comparable label attached to features and scenarios.
///
/// Tags are compared by exact string equality; the core imposes no syntax
/// on them (whether the invoking layer keeps a leading `@` is its own
/// business, as long as it is consistent).
///
/// # Examples
///
/// ```
/// use runplan::Tag;
///
/// let tag = Tag::new("smoke");
/// assert_eq!(tag.as_str(), "smoke");
/// assert_ne!(tag, Tag::new("@smoke"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, From)]
pub struct Tag(String);

impl Tag {
    /// Construct a tag from any string-like value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the underlying label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A set of tags belonging to one owner: no duplicates, no order.
pub type TagSet = HashSet<Tag>;

/// Collect string-like values into a [`TagSet`].
///
/// # Examples
///
/// ```
/// use runplan::tag_set;
///
/// let tags = tag_set(["smoke", "fast"]);
/// assert_eq!(tags.len(), 2);
/// ```
pub fn tag_set<I, T>(tags: I) -> TagSet
where
    I: IntoIterator<Item = T>,
    T: Into<Tag>,
{
    tags.into_iter().map(Into::into).collect()
}

/// Wrapper for step text content taken from scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepText<'a>(&'a str);

impl<'a> StepText<'a> {
    /// Construct a new `StepText` from a string slice.
    #[must_use]
    pub const fn new(s: &'a str) -> Self {
        Self(s)
    }

    /// Access the underlying string slice.
    #[must_use]
    pub const fn as_str(self) -> &'a str {
        self.0
    }
}

impl<'a> From<&'a str> for StepText<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s)
    }
}

/// Context passed to step functions carrying references to named fixtures.
///
/// The executor constructs one per step invocation; this core only fixes the
/// shape so bound functions have a stable signature.
#[derive(Default)]
pub struct StepContext<'a> {
    fixtures: HashMap<&'static str, &'a dyn Any>,
}

impl<'a> StepContext<'a> {
    /// Insert a fixture reference by name.
    pub fn insert<T: Any>(&mut self, name: &'static str, value: &'a T) {
        self.fixtures.insert(name, value);
    }

    /// Retrieve a fixture reference by name and type.
    #[must_use]
    pub fn get<T: Any>(&self, name: &str) -> Option<&'a T> {
        self.fixtures.get(name)?.downcast_ref::<T>()
    }
}

/// Type alias for the stored step function pointer.
pub type StepFn = for<'a> fn(&StepContext<'a>);

/// The function slot attached to a step by the binder.
///
/// Unresolved lookups are data, not errors: a step whose text has no
/// registry entry stays [`Unbound`](Self::Unbound) and it is the executor's
/// job to surface that as an undefined-step report. The tagged form (rather
/// than a bare `Option` field) forces executors to handle both cases.
#[derive(Clone, Copy, Default)]
pub enum StepBinding {
    /// The registry resolved the step to this function.
    Bound(StepFn),
    /// No registry entry matched the step's keyword and text.
    #[default]
    Unbound,
}

impl StepBinding {
    /// True when a function was resolved.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        matches!(self, Self::Bound(_))
    }

    /// Return the bound function, if any.
    #[must_use]
    pub const fn as_fn(&self) -> Option<StepFn> {
        match self {
            Self::Bound(run) => Some(*run),
            Self::Unbound => None,
        }
    }
}

impl fmt::Debug for StepBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bound(_) => f.write_str("Bound(..)"),
            Self::Unbound => f.write_str("Unbound"),
        }
    }
}

impl From<Option<StepFn>> for StepBinding {
    fn from(value: Option<StepFn>) -> Self {
        value.map_or(Self::Unbound, Self::Bound)
    }
}
