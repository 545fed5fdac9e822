//! Behavioural coverage for the pattern mini-language.

use rstest::rstest;
use runplan_patterns::{
    SpecificityScore, StepKeyword, build_regex_from_pattern, compile_regex_from_pattern,
    literal_text,
};

#[rstest]
#[case("a monkey", "a monkey", true)]
#[case("a monkey", "a gorilla", false)]
#[case("a {animal}", "a gorilla", true)]
#[case("a {animal}", "two gorillas", false)]
#[case("{count} bananas on {surface}", "3 bananas on the floor", true)]
#[case("{count} bananas on {surface}", "3 bananas", false)]
fn compiled_patterns_match_expected_texts(
    #[case] pattern: &str,
    #[case] text: &str,
    #[case] expected: bool,
) {
    let regex = match compile_regex_from_pattern(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("pattern {pattern:?} should compile: {err}"),
    };
    assert_eq!(regex.is_match(text), expected);
}

#[test]
fn matching_is_anchored_at_both_ends() {
    let regex = match compile_regex_from_pattern("a monkey") {
        Ok(regex) => regex,
        Err(err) => panic!("pattern should compile: {err}"),
    };
    assert!(!regex.is_match("a monkey appears"));
    assert!(!regex.is_match("suddenly a monkey"));
}

#[rstest]
#[case("broken}")]
#[case("{ open")]
#[case("{bad name}")]
fn malformed_patterns_are_rejected(#[case] pattern: &str) {
    assert!(build_regex_from_pattern(pattern).is_err());
}

#[test]
fn specificity_prefers_the_literal_rendition() {
    let literal = match SpecificityScore::calculate("a hungry monkey") {
        Ok(score) => score,
        Err(err) => panic!("score should calculate: {err}"),
    };
    let generic = match SpecificityScore::calculate("a {mood} {animal}") {
        Ok(score) => score,
        Err(err) => panic!("score should calculate: {err}"),
    };
    assert!(literal > generic);
}

#[test]
fn literal_patterns_round_trip_through_literal_text() {
    let resolved = match literal_text("a monkey") {
        Ok(resolved) => resolved,
        Err(err) => panic!("pattern should lex: {err}"),
    };
    assert_eq!(resolved.as_deref(), Some("a monkey"));
}

#[test]
fn keyword_parse_feeds_registration_paths() {
    let keyword: StepKeyword = match "given".parse() {
        Ok(keyword) => keyword,
        Err(err) => panic!("keyword should parse: {err}"),
    };
    assert_eq!(keyword, StepKeyword::Given);
    assert!("giveen".parse::<StepKeyword>().is_err());
}
