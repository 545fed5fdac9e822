//! End-to-end selection and binding through `run_with_registry`.

use runplan::{
    Feature, Scenario, Step, StepContext, StepRegistry, TagFilter, run_with_registry, tag_set,
};
use runplan_patterns::StepKeyword;

fn noop(_: &StepContext<'_>) {}

fn auth_feature() -> Feature {
    Feature::new(
        "Sign in",
        tag_set(["auth"]),
        vec![
            Scenario::new(
                "Happy path",
                tag_set(["smoke"]),
                vec![
                    Step::new(StepKeyword::Given, "a registered user"),
                    Step::new(StepKeyword::When, "they sign in"),
                    Step::new(StepKeyword::Then, "they see the dashboard"),
                ],
            ),
            Scenario::new(
                "Password reset",
                tag_set(["slow"]),
                vec![Step::new(StepKeyword::When, "they reset their password")],
            ),
        ],
    )
}

fn full_registry() -> StepRegistry {
    let mut registry = StepRegistry::new();
    registry.register(StepKeyword::Given, "a registered user", noop);
    registry.register(StepKeyword::When, "they sign in", noop);
    registry.register(StepKeyword::Then, "they see the dashboard", noop);
    registry.register(StepKeyword::When, "they reset their password", noop);
    registry
}

#[test]
fn selects_then_binds_the_surviving_scenario() {
    let bound = run_with_registry(
        vec![auth_feature()],
        &TagFilter::all(["auth", "smoke"]),
        &full_registry(),
    );

    let feature = match bound.first() {
        Some(feature) => feature,
        None => panic!("the feature should survive selection"),
    };
    assert_eq!(feature.scenarios.len(), 1);

    let scenario = match feature.scenarios.first() {
        Some(scenario) => scenario,
        None => panic!("the smoke scenario should survive selection"),
    };
    assert_eq!(scenario.name, "Happy path");
    assert!(scenario.steps.iter().all(|step| step.binding.is_bound()));
}

#[test]
fn partial_registries_bind_what_they_can() {
    let mut registry = StepRegistry::new();
    registry.register(StepKeyword::Given, "a registered user", noop);
    registry.register(StepKeyword::Then, "they see the dashboard", noop);

    let bound = run_with_registry(vec![auth_feature()], &TagFilter::none(), &registry);
    let flags: Vec<bool> = bound
        .iter()
        .flat_map(|feature| &feature.scenarios)
        .flat_map(|scenario| &scenario.steps)
        .map(|step| step.binding.is_bound())
        .collect();

    assert_eq!(flags, vec![true, false, true, false]);
}

#[test]
fn pattern_entries_bind_through_the_full_chain() {
    let mut registry = StepRegistry::new();
    let registered = registry.register_pattern(StepKeyword::When, "they {action}", noop);
    match registered {
        Ok(()) => {}
        Err(err) => panic!("pattern should register: {err}"),
    }

    let bound = run_with_registry(vec![auth_feature()], &TagFilter::none(), &registry);
    let when_steps: Vec<&Step> = bound
        .iter()
        .flat_map(|feature| &feature.scenarios)
        .flat_map(|scenario| &scenario.steps)
        .filter(|step| step.keyword == StepKeyword::When)
        .collect();

    assert_eq!(when_steps.len(), 2);
    assert!(when_steps.iter().all(|step| step.binding.is_bound()));
}

#[test]
fn an_emptied_feature_flows_through_binding_unharmed() {
    let bound = run_with_registry(
        vec![auth_feature()],
        &TagFilter::all(["no-such-tag"]),
        &full_registry(),
    );

    assert_eq!(bound.len(), 1);
    let feature = match bound.first() {
        Some(feature) => feature,
        None => panic!("the feature should be retained"),
    };
    assert!(feature.scenarios.is_empty());
}
