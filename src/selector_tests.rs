use super::*;
use crate::error::TsvGuardError;

fn active_codes(skip: &[&str]) -> Vec<&'static str> {
    let registry = CheckRegistry::new();
    let skip: Vec<String> = skip.iter().map(ToString::to_string).collect();
    select(&registry, &skip)
        .unwrap()
        .iter()
        .map(|c| c.code())
        .collect()
}

#[test]
fn no_filters_keeps_full_catalogue_order() {
    assert_eq!(
        active_codes(&[]),
        vec!["E1", "E2", "E3", "E4", "E5", "E6", "E8", "E9", "E10", "W1"]
    );
}

#[test]
fn exact_code_is_excluded() {
    let codes = active_codes(&["E9"]);
    assert!(!codes.contains(&"E9"));
    assert_eq!(codes.len(), 9);
}

#[test]
fn multiple_exact_codes_are_excluded() {
    let codes = active_codes(&["E9", "E2"]);
    assert!(!codes.contains(&"E9"));
    assert!(!codes.contains(&"E2"));
    assert_eq!(codes.len(), 8);
}

#[test]
fn regex_excludes_all_matching_codes() {
    // "E.*" must drop every E code and keep the W class untouched.
    assert_eq!(active_codes(&["E.*"]), vec!["W1"]);
}

#[test]
fn regex_match_is_anchored_to_full_code() {
    // "1" alone matches no code outright; it must not strip E1 or W1.
    let codes = active_codes(&["1"]);
    assert!(codes.contains(&"E1"));
    assert!(codes.contains(&"W1"));
    assert_eq!(codes.len(), 10);
}

#[test]
fn regex_with_alternation_excludes_each_branch() {
    let codes = active_codes(&["E1|W1"]);
    assert!(!codes.contains(&"E1"));
    assert!(!codes.contains(&"W1"));
    assert_eq!(codes.len(), 8);
}

#[test]
fn non_matching_regex_excludes_nothing() {
    assert_eq!(active_codes(&["Z9"]).len(), 10);
}

#[test]
fn remaining_checks_keep_registry_order() {
    assert_eq!(
        active_codes(&["E3", "E9"]),
        vec!["E1", "E2", "E4", "E5", "E6", "E8", "E10", "W1"]
    );
}

#[test]
fn invalid_filter_fails() {
    let registry = CheckRegistry::new();
    let err = select(&registry, &["[".to_string()]).unwrap_err();
    assert!(matches!(err, TsvGuardError::InvalidFilter { pattern, .. } if pattern == "["));
}

#[test]
fn selection_is_idempotent() {
    let registry = CheckRegistry::new();
    let skip = vec!["E.*".to_string(), "W1".to_string()];

    let first: Vec<&str> = select(&registry, &skip)
        .unwrap()
        .iter()
        .map(|c| c.code())
        .collect();
    let second: Vec<&str> = select(&registry, &skip)
        .unwrap()
        .iter()
        .map(|c| c.code())
        .collect();

    assert_eq!(first, second);
    assert!(first.is_empty());
}
