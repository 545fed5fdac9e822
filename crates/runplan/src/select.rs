//! Scenario selection: tag projection followed by tag filtering.

use crate::feature::Feature;
use crate::tags::{self, TagFilter};

/// Filter each feature's scenarios by the supplied tag filter.
///
/// Every feature is projected first, unconditionally, so `all_tags` is
/// populated downstream even when the filter is empty. Features whose
/// scenario list empties out stay in the result with zero scenarios so the
/// host can still report on them ("feature X: 0 scenarios ran"). Feature
/// order and surviving-scenario order are preserved.
///
/// # Examples
///
/// ```
/// use runplan::{Feature, Scenario, TagFilter, select_features, tag_set};
///
/// let features = vec![Feature::new(
///     "Monkey care",
///     tag_set(["animals"]),
///     vec![
///         Scenario::new("Feeding time", tag_set(["smoke"]), Vec::new()),
///         Scenario::new("Hibernation", tag_set(["slow"]), Vec::new()),
///     ],
/// )];
/// let selected = select_features(features, &TagFilter::all(["animals", "smoke"]));
/// assert_eq!(selected.len(), 1);
/// assert_eq!(selected[0].scenarios.len(), 1);
/// assert_eq!(selected[0].scenarios[0].name, "Feeding time");
/// ```
#[must_use]
pub fn select_features(features: Vec<Feature>, filter: &TagFilter) -> Vec<Feature> {
    if filter.is_overspecified() {
        log::warn!(
            "tag filter supplies both and-tags and or-tags; and-tags take precedence and the \
             or-tags are ignored"
        );
    }
    features
        .into_iter()
        .map(tags::project)
        .map(|mut feature| {
            feature
                .scenarios
                .retain(|scenario| filter.selects(&scenario.all_tags));
            feature
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::Scenario;
    use crate::types::tag_set;

    fn menagerie() -> Vec<Feature> {
        vec![
            Feature::new(
                "Monkey care",
                tag_set(["animals"]),
                vec![
                    Scenario::new("Feeding time", tag_set(["smoke"]), Vec::new()),
                    Scenario::new("Hibernation", tag_set(["slow"]), Vec::new()),
                ],
            ),
            Feature::new(
                "Greenhouse",
                tag_set(["plants"]),
                vec![Scenario::new("Watering", tag_set(["fast"]), Vec::new())],
            ),
        ]
    }

    fn scenario_names(feature: &Feature) -> Vec<&str> {
        feature
            .scenarios
            .iter()
            .map(|scenario| scenario.name.as_str())
            .collect()
    }

    #[test]
    fn empty_filter_keeps_every_scenario_in_order() {
        let selected = select_features(menagerie(), &TagFilter::none());

        assert_eq!(selected.len(), 2);
        let first = match selected.first() {
            Some(feature) => feature,
            None => panic!("selection should keep features"),
        };
        assert_eq!(scenario_names(first), vec!["Feeding time", "Hibernation"]);
        // Projection ran even without a filter.
        assert!(
            first
                .scenarios
                .iter()
                .all(|scenario| !scenario.all_tags.is_empty())
        );
    }

    #[test]
    fn and_filter_keeps_only_fully_tagged_scenarios() {
        let selected = select_features(menagerie(), &TagFilter::all(["animals", "smoke"]));

        let names: Vec<Vec<&str>> = selected.iter().map(scenario_names).collect();
        assert_eq!(names, vec![vec!["Feeding time"], Vec::<&str>::new()]);
    }

    #[test]
    fn or_filter_keeps_any_intersecting_scenario() {
        let selected = select_features(menagerie(), &TagFilter::any(["fast", "smoke"]));

        let names: Vec<Vec<&str>> = selected.iter().map(scenario_names).collect();
        assert_eq!(names, vec![vec!["Feeding time"], vec!["Watering"]]);
    }

    #[test]
    fn emptied_features_are_kept_for_bookkeeping() {
        let selected = select_features(menagerie(), &TagFilter::all(["no-such-tag"]));

        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|feature| feature.scenarios.is_empty()));
    }

    #[test]
    fn feature_tags_select_scenarios_through_projection() {
        // "animals" sits on the feature, not the scenarios; projection must
        // make it count for both of them.
        let selected = select_features(menagerie(), &TagFilter::any(["animals"]));

        let names: Vec<Vec<&str>> = selected.iter().map(scenario_names).collect();
        assert_eq!(
            names,
            vec![vec!["Feeding time", "Hibernation"], Vec::<&str>::new()]
        );
    }
}
