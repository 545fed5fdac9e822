//! Behavioural coverage for tag-driven scenario selection, driven through
//! parsed Gherkin features.

use rstest::rstest;
use runplan::{Feature, TagFilter, select_features, tag_set};

fn parsed_features() -> Vec<Feature> {
    let sources = [
        "\
@auth
Feature: Sign in

  @smoke @fast
  Scenario: Happy path
    Given a registered user
    When they sign in
    Then they see the dashboard

  @slow
  Scenario: Password reset
    Given a registered user
    When they reset their password
    Then they receive an email
",
        "\
Feature: Billing

  @smoke
  Scenario: Invoice totals
    Given an open invoice
    Then the total matches the line items
",
    ];
    sources
        .iter()
        .map(|source| {
            match gherkin::Feature::parse(source, gherkin::GherkinEnv::default()) {
                Ok(parsed) => Feature::from(&parsed),
                Err(err) => panic!("fixture feature should parse: {err}"),
            }
        })
        .collect()
}

fn scenario_names(features: &[Feature]) -> Vec<Vec<String>> {
    features
        .iter()
        .map(|feature| {
            feature
                .scenarios
                .iter()
                .map(|scenario| scenario.name.clone())
                .collect()
        })
        .collect()
}

#[test]
fn empty_filter_keeps_everything_and_still_projects() {
    let selected = select_features(parsed_features(), &TagFilter::none());

    assert_eq!(
        scenario_names(&selected),
        vec![
            vec!["Happy path".to_string(), "Password reset".to_string()],
            vec!["Invoice totals".to_string()],
        ]
    );
    for feature in &selected {
        for scenario in &feature.scenarios {
            assert!(scenario.tags.is_subset(&scenario.all_tags));
        }
    }
}

#[test]
fn and_selection_spans_feature_and_scenario_tags() {
    let selected = select_features(parsed_features(), &TagFilter::all(["auth", "smoke"]));

    assert_eq!(
        scenario_names(&selected),
        vec![vec!["Happy path".to_string()], Vec::<String>::new()]
    );
    // The emptied feature is retained for bookkeeping.
    assert_eq!(selected.len(), 2);
}

#[test]
fn or_selection_keeps_any_intersecting_scenario() {
    let selected = select_features(parsed_features(), &TagFilter::any(["fast", "smoke"]));

    assert_eq!(
        scenario_names(&selected),
        vec![
            vec!["Happy path".to_string()],
            vec!["Invoice totals".to_string()],
        ]
    );
}

#[rstest]
#[case(TagFilter::all(["no-such-tag"]))]
#[case(TagFilter::any(["no-such-tag"]))]
fn unmatched_filters_empty_every_feature(#[case] filter: TagFilter) {
    let selected = select_features(parsed_features(), &filter);

    assert_eq!(selected.len(), 2);
    assert!(selected.iter().all(|feature| feature.scenarios.is_empty()));
}

#[test]
fn derived_tags_union_feature_and_scenario_tags() {
    let selected = select_features(parsed_features(), &TagFilter::none());
    let happy_path = selected
        .iter()
        .flat_map(|feature| &feature.scenarios)
        .find(|scenario| scenario.name == "Happy path");

    let scenario = match happy_path {
        Some(scenario) => scenario,
        None => panic!("selection should keep the happy path scenario"),
    };
    assert_eq!(scenario.all_tags, tag_set(["auth", "smoke", "fast"]));
}
