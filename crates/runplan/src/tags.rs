//! Tag algebra, tag filters, and feature-to-scenario tag projection.

use crate::feature::Feature;
use crate::types::{Tag, TagSet};

/// True iff every tag in `and_tags` is present in `all_tags`.
///
/// Vacuously true for an empty `and_tags`.
///
/// # Examples
///
/// ```
/// use runplan::{matches_all, tag_set};
///
/// let owned = tag_set(["auth", "smoke", "fast"]);
/// assert!(matches_all(&owned, &tag_set(["auth", "smoke"])));
/// assert!(!matches_all(&owned, &tag_set(["auth", "slow"])));
/// assert!(matches_all(&owned, &tag_set::<[&str; 0], _>([])));
/// ```
#[must_use]
pub fn matches_all(all_tags: &TagSet, and_tags: &TagSet) -> bool {
    and_tags.is_subset(all_tags)
}

/// True iff `all_tags` and `or_tags` intersect.
///
/// False for an empty `or_tags`.
///
/// # Examples
///
/// ```
/// use runplan::{matches_any, tag_set};
///
/// let owned = tag_set(["slow"]);
/// assert!(!matches_any(&owned, &tag_set(["fast", "smoke"])));
/// assert!(matches_any(&owned, &tag_set(["slow", "smoke"])));
/// ```
#[must_use]
pub fn matches_any(all_tags: &TagSet, or_tags: &TagSet) -> bool {
    !all_tags.is_disjoint(or_tags)
}

/// The tag filter supplied by the invoking layer: an and-set, an or-set, or
/// neither.
///
/// At most one set should be non-empty. The core tolerates both being
/// supplied — AND semantics are checked first and win — but logs a warning
/// so the host can surface the conflict (see [`crate::select_features`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    and_tags: TagSet,
    or_tags: TagSet,
}

impl TagFilter {
    /// A filter that selects every scenario.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// A filter keeping scenarios that carry every one of `tags`.
    #[must_use]
    pub fn all<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        Self {
            and_tags: tags.into_iter().map(Into::into).collect(),
            or_tags: TagSet::new(),
        }
    }

    /// A filter keeping scenarios that carry at least one of `tags`.
    #[must_use]
    pub fn any<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        Self {
            and_tags: TagSet::new(),
            or_tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Assemble a filter from both sets, as handed over by a CLI layer.
    #[must_use]
    pub fn new(and_tags: TagSet, or_tags: TagSet) -> Self {
        Self { and_tags, or_tags }
    }

    /// The and-set.
    #[must_use]
    pub fn and_tags(&self) -> &TagSet {
        &self.and_tags
    }

    /// The or-set.
    #[must_use]
    pub fn or_tags(&self) -> &TagSet {
        &self.or_tags
    }

    /// True when no tags were supplied at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.and_tags.is_empty() && self.or_tags.is_empty()
    }

    /// True when both sets were supplied, which the convention forbids.
    #[must_use]
    pub fn is_overspecified(&self) -> bool {
        !self.and_tags.is_empty() && !self.or_tags.is_empty()
    }

    /// Decide whether a scenario with the given derived tags is selected.
    ///
    /// The and-set is checked first; the or-set only applies when no
    /// and-set was supplied; an empty filter selects everything.
    #[must_use]
    pub fn selects(&self, all_tags: &TagSet) -> bool {
        if !self.and_tags.is_empty() {
            matches_all(all_tags, &self.and_tags)
        } else if !self.or_tags.is_empty() {
            matches_any(all_tags, &self.or_tags)
        } else {
            true
        }
    }
}

/// Project feature-level tags onto every scenario.
///
/// Each scenario's `all_tags` becomes the union of the feature's tags and
/// the scenario's own tags, recomputed from scratch — rerunning after the
/// feature tags change overwrites the previous derivation rather than
/// merging with it.
///
/// # Examples
///
/// ```
/// use runplan::{Feature, Scenario, project, tag_set};
///
/// let feature = Feature::new(
///     "Monkey care",
///     tag_set(["animals"]),
///     vec![Scenario::new("Feeding time", tag_set(["smoke"]), Vec::new())],
/// );
/// let projected = project(feature);
/// assert_eq!(
///     projected.scenarios[0].all_tags,
///     tag_set(["animals", "smoke"]),
/// );
/// ```
#[must_use]
pub fn project(mut feature: Feature) -> Feature {
    for scenario in &mut feature.scenarios {
        let mut all_tags = feature.tags.clone();
        all_tags.extend(scenario.tags.iter().cloned());
        scenario.all_tags = all_tags;
    }
    feature
}
