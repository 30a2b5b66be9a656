#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_system_preference_is_false_in_non_hydrate_tests() {
    assert!(!read_system_preference());
}

#[test]
fn theme_name_maps_boolean() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
