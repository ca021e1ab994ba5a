//! Property-based tests for classification and the checking engine.
//!
//! These use proptest to generate arbitrary runtime values and verify:
//! 1. Classification is total, stable, and agrees with identity matching
//! 2. A value matches at most one built-in identity
//! 3. The strict outcome of a check agrees with the pure audit

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;

use argus_check::{
    classify, silent_sink, ArgSpec, CallSite, CheckConfig, Registry, TypeTag, Value,
    CUSTOM_CLASS_LABEL, TYPE_TABLE,
};

/// Generate an arbitrary runtime value across the whole taxonomy.
fn value_strategy() -> impl Strategy<Value = Value> {
    let scalars = prop_oneof![
        Just(Value::Null),
        Just(Value::Undefined),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>().prop_map(Value::number),
        ".{0,12}".prop_map(Value::string),
        any::<i64>().prop_map(Value::date),
    ];
    let composites = prop_oneof![
        prop::collection::vec(Just(Value::Null), 0..3).prop_map(Value::array),
        "[a-z]{1,8}".prop_map(|key| Value::object([(key, Value::Bool(true))])),
        "[a-z]{1,8}".prop_map(Value::function),
        "[a-z+*]{0,8}".prop_map(Value::regexp),
        ".{0,12}".prop_map(Value::error),
        ".{0,12}".prop_map(Value::type_error),
        "[A-Z][a-zA-Z]{0,8}".prop_map(|class| Value::instance(class, [("x", Value::Null)])),
    ];
    prop_oneof![scalars, composites]
}

/// Every identity-bearing entry of the canonical table.
fn identity_entries() -> Vec<(&'static str, TypeTag)> {
    TYPE_TABLE
        .iter()
        .filter_map(|entry| entry.identity.clone().map(|identity| (entry.name, identity)))
        .collect()
}

/// A small list of acceptable types drawn from the canonical names.
fn accepts_strategy() -> impl Strategy<Value = Vec<TypeTag>> {
    let tags: Vec<TypeTag> = TYPE_TABLE
        .iter()
        .filter_map(|entry| TypeTag::from_name(entry.name))
        .collect();
    prop::sample::subsequence(tags, 0..=3)
}

proptest! {
    #[test]
    fn classification_is_total_and_stable(value in value_strategy()) {
        let name = classify(&value);
        prop_assert!(!name.is_empty());
        prop_assert_eq!(name, classify(&value));
    }

    #[test]
    fn classification_agrees_with_identity_matching(value in value_strategy()) {
        for (name, identity) in identity_entries() {
            if value.matches(&identity) {
                prop_assert_eq!(classify(&value), name);
            }
        }
    }

    #[test]
    fn at_most_one_builtin_identity_matches(value in value_strategy()) {
        let matched = identity_entries()
            .iter()
            .filter(|(_, identity)| value.matches(identity))
            .count();
        prop_assert!(matched <= 1, "value {} matched {} identities", value, matched);
    }

    #[test]
    fn unknown_identities_get_the_custom_label(class in "[A-Z][a-zA-Z]{0,8}") {
        let instance = Value::instance(class, [("x", Value::Null)]);
        prop_assert_eq!(classify(&instance), CUSTOM_CLASS_LABEL);
    }

    #[test]
    fn strict_outcome_agrees_with_audit(
        value in value_strategy(),
        accepts in accepts_strategy(),
    ) {
        let registry = Registry::new();
        let site = CallSite::new("prop.js", "check");
        let specs = [ArgSpec::typed(&value, accepts)];
        let violations = registry.audit(&specs);
        let outcome = registry.check_at(&site, &specs);
        prop_assert_eq!(outcome.is_err(), !violations.is_empty());
    }

    #[test]
    fn lenient_checks_never_fail(
        value in value_strategy(),
        accepts in accepts_strategy(),
    ) {
        let registry = Registry::with_sink(CheckConfig::lenient(), silent_sink());
        let site = CallSite::new("prop.js", "check");
        let specs = [ArgSpec::typed(&value, accepts)];
        prop_assert!(registry.check_at(&site, &specs).is_ok());
    }

    #[test]
    fn required_fails_exactly_on_the_missing_sentinel(value in value_strategy()) {
        let registry = Registry::new();
        let specs = [ArgSpec::required(&value)];
        let violations = registry.audit(&specs);
        prop_assert_eq!(violations.len(), usize::from(value.is_undefined()));
    }
}
