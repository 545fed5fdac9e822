//! The feature model consumed by selection and binding.
//!
//! Instances are produced by the external parser (or converted from
//! [`gherkin`] output), transformed in turn by tag projection, selection,
//! and the binder, and finally handed to the executor.

use camino::Utf8PathBuf;

use crate::types::{StepBinding, TagSet};
use runplan_patterns::StepKeyword;

/// A single Given/When/Then instruction with literal text.
///
/// Identity for registry lookup purposes is `(keyword, text)`; a step does
/// not carry its own tags.
#[derive(Debug, Clone)]
pub struct Step {
    /// The resolved step keyword.
    pub keyword: StepKeyword,
    /// The literal step text, without the keyword.
    pub text: String,
    /// The function slot populated by the binder.
    pub binding: StepBinding,
}

impl Step {
    /// Create an unbound step.
    #[must_use]
    pub fn new(keyword: StepKeyword, text: impl Into<String>) -> Self {
        Self {
            keyword,
            text: text.into(),
            binding: StepBinding::Unbound,
        }
    }
}

/// A tagged, ordered sequence of steps representing one test case.
#[derive(Debug, Clone, Default)]
pub struct Scenario {
    /// The scenario name, as authored.
    pub name: String,
    /// Tags authored directly on the scenario.
    pub tags: TagSet,
    /// The ordered steps of the scenario.
    pub steps: Vec<Step>,
    /// Derived union of the scenario's tags and its feature's tags.
    ///
    /// Empty until tag projection runs; always recomputed from current
    /// inputs, never merged with a previous value.
    pub all_tags: TagSet,
}

impl Scenario {
    /// Create a scenario with empty derived tags.
    #[must_use]
    pub fn new(name: impl Into<String>, tags: TagSet, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            tags,
            steps,
            all_tags: TagSet::new(),
        }
    }
}

/// A named, tagged collection of scenarios.
#[derive(Debug, Clone, Default)]
pub struct Feature {
    /// The feature name, as authored.
    pub name: String,
    /// Source path of the feature file, when known.
    pub path: Option<Utf8PathBuf>,
    /// Tags authored on the feature itself.
    pub tags: TagSet,
    /// The ordered scenarios of the feature.
    pub scenarios: Vec<Scenario>,
}

impl Feature {
    /// Create a feature without a source path.
    #[must_use]
    pub fn new(name: impl Into<String>, tags: TagSet, scenarios: Vec<Scenario>) -> Self {
        Self {
            name: name.into(),
            path: None,
            tags,
            scenarios,
        }
    }
}

impl From<&gherkin::Step> for Step {
    fn from(step: &gherkin::Step) -> Self {
        Self::new(StepKeyword::from(step.ty), step.value.clone())
    }
}

impl From<&gherkin::Scenario> for Scenario {
    fn from(scenario: &gherkin::Scenario) -> Self {
        Self::new(
            scenario.name.clone(),
            scenario.tags.iter().cloned().map(Into::into).collect(),
            scenario.steps.iter().map(Into::into).collect(),
        )
    }
}

impl From<&gherkin::Feature> for Feature {
    fn from(feature: &gherkin::Feature) -> Self {
        Self {
            name: feature.name.clone(),
            path: feature
                .path
                .clone()
                .and_then(|path| Utf8PathBuf::from_path_buf(path).ok()),
            tags: feature.tags.iter().cloned().map(Into::into).collect(),
            scenarios: feature.scenarios.iter().map(Into::into).collect(),
        }
    }
}
