use std::collections::HashSet;

use super::*;
use crate::checks::CheckScope;
use crate::error::TsvGuardError;

#[test]
fn catalogue_order_is_stable_ascending() {
    let registry = CheckRegistry::new();
    let codes: Vec<&str> = registry.codes().collect();
    assert_eq!(
        codes,
        vec!["E1", "E2", "E3", "E4", "E5", "E6", "E8", "E9", "E10", "W1"]
    );
}

#[test]
fn codes_are_unique() {
    let registry = CheckRegistry::new();
    let codes: Vec<&str> = registry.codes().collect();
    let unique: HashSet<&str> = codes.iter().copied().collect();
    assert_eq!(unique.len(), codes.len());
}

#[test]
fn lookup_returns_matching_definition() {
    let registry = CheckRegistry::new();
    let check = registry.lookup("E4").unwrap();
    assert_eq!(check.code(), "E4");
    assert_eq!(check.name(), "Wrong number of tabs");
}

#[test]
fn lookup_unknown_code_fails() {
    let registry = CheckRegistry::new();
    let err = registry.lookup("E99").unwrap_err();
    assert!(matches!(err, TsvGuardError::UnknownCheck(code) if code == "E99"));
}

#[test]
fn contains_reflects_catalogue() {
    let registry = CheckRegistry::new();
    assert!(registry.contains("W1"));
    assert!(!registry.contains("E0"));
}

#[test]
fn whole_file_checks_have_file_scope() {
    let registry = CheckRegistry::new();
    for code in ["E8", "E9", "E10"] {
        assert_eq!(registry.lookup(code).unwrap().scope(), CheckScope::File);
    }
    for code in ["E1", "E2", "E3", "E4", "E5", "E6", "W1"] {
        assert_eq!(registry.lookup(code).unwrap().scope(), CheckScope::Line);
    }
}

#[test]
fn default_matches_new() {
    assert_eq!(CheckRegistry::default().len(), CheckRegistry::new().len());
    assert!(!CheckRegistry::new().is_empty());
}
