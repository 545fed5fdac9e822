//! Attach registry-resolved functions to the steps of selected features.

use crate::feature::{Feature, Scenario, Step};
use crate::registry::StepRegistry;
use crate::types::{StepBinding, StepText};

/// Resolve every step of every scenario of every feature against the
/// registry.
///
/// A step whose lookup misses passes through [`StepBinding::Unbound`]: an
/// unresolved binding is data for the executor, not an error here, and one
/// step's miss never blocks its siblings.
///
/// # Examples
///
/// ```
/// use runplan::{
///     Feature, Scenario, Step, StepContext, StepRegistry, bind_steps, tag_set,
/// };
/// use runplan_patterns::StepKeyword;
///
/// fn feed(_: &StepContext<'_>) {}
///
/// let mut registry = StepRegistry::new();
/// registry.register(StepKeyword::Given, "a monkey", feed);
///
/// let features = vec![Feature::new(
///     "Monkey care",
///     tag_set(["animals"]),
///     vec![Scenario::new(
///         "Feeding time",
///         tag_set(["smoke"]),
///         vec![
///             Step::new(StepKeyword::Given, "a monkey"),
///             Step::new(StepKeyword::Given, "a gorilla"),
///         ],
///     )],
/// )];
/// let bound = bind_steps(features, &registry);
/// assert!(bound[0].scenarios[0].steps[0].binding.is_bound());
/// assert!(!bound[0].scenarios[0].steps[1].binding.is_bound());
/// ```
#[must_use]
pub fn bind_steps(features: Vec<Feature>, registry: &StepRegistry) -> Vec<Feature> {
    features
        .into_iter()
        .map(|feature| bind_feature(feature, registry))
        .collect()
}

fn bind_feature(mut feature: Feature, registry: &StepRegistry) -> Feature {
    feature.scenarios = feature
        .scenarios
        .into_iter()
        .map(|scenario| bind_scenario(scenario, registry))
        .collect();
    feature
}

fn bind_scenario(mut scenario: Scenario, registry: &StepRegistry) -> Scenario {
    for step in &mut scenario.steps {
        bind_step(step, registry);
    }
    scenario
}

fn bind_step(step: &mut Step, registry: &StepRegistry) {
    let found = registry.find(step.keyword, StepText::new(&step.text));
    if found.is_none() {
        log::debug!("no step definition for {} '{}'", step.keyword, step.text);
    }
    step.binding = StepBinding::from(found);
}
