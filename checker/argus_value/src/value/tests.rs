use pretty_assertions::assert_eq;

use super::*;

#[test]
fn default_is_undefined() {
    assert_eq!(Value::default(), Value::Undefined);
}

#[test]
fn sentinels_are_distinguishable() {
    assert!(Value::Null.is_null());
    assert!(!Value::Null.is_undefined());
    assert!(Value::Undefined.is_undefined());
    assert!(!Value::Undefined.is_null());
}

#[test]
fn factories_produce_expected_variants() {
    assert_eq!(Value::number(1.5), Value::Number(1.5));
    assert_eq!(Value::string("hi"), Value::Str("hi".to_owned()));
    assert_eq!(Value::array(vec![]), Value::Array(vec![]));
    assert_eq!(Value::regexp("a+"), Value::Regexp("a+".to_owned()));
    assert_eq!(Value::error("boom"), Value::Error("boom".to_owned()));
    assert_eq!(Value::type_error("bad"), Value::TypeError("bad".to_owned()));
    assert!(matches!(Value::function("run"), Value::Function(_)));
    assert!(matches!(Value::date(0), Value::Date(0)));
    assert!(matches!(
        Value::object([("name", Value::string("Alice"))]),
        Value::Object(_)
    ));
    assert!(matches!(
        Value::instance("User", [("id", Value::number(1.0))]),
        Value::Instance(_)
    ));
}

#[test]
fn accessors_view_matching_variants_only() {
    assert_eq!(Value::string("hi").as_str(), Some("hi"));
    assert_eq!(Value::number(2.0).as_str(), None);
    assert_eq!(Value::number(2.0).as_number(), Some(2.0));
    assert_eq!(Value::Bool(true).as_number(), None);
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Null.as_bool(), None);
    let items = vec![Value::number(1.0)];
    assert_eq!(Value::array(items.clone()).as_array(), Some(items.as_slice()));
    assert_eq!(Value::string("hi").as_array(), None);
}

#[test]
fn instance_exposes_class_and_fields() {
    let user = InstanceValue::new(
        "User",
        [("name".to_owned(), Value::string("Alice"))]
            .into_iter()
            .collect(),
    );
    assert_eq!(user.class(), "User");
    assert_eq!(user.field("name"), Some(&Value::string("Alice")));
    assert_eq!(user.field("age"), None);
}

#[test]
fn every_variant_matches_its_own_tag() {
    let cases = [
        (Value::Null, TypeTag::Null),
        (Value::Undefined, TypeTag::Undefined),
        (Value::Bool(true), TypeTag::Boolean),
        (Value::number(1.0), TypeTag::Number),
        (Value::string("s"), TypeTag::String),
        (Value::array(vec![]), TypeTag::Array),
        (Value::object([("k", Value::Null)]), TypeTag::Object),
        (Value::function("f"), TypeTag::Function),
        (Value::date(0), TypeTag::Date),
        (Value::regexp("a"), TypeTag::Regexp),
        (Value::error("e"), TypeTag::Error),
        (Value::type_error("t"), TypeTag::TypeError),
    ];
    for (value, tag) in &cases {
        assert!(value.matches(tag), "{value} should match {tag}");
    }
}

#[test]
fn matching_is_exact_identity_not_coercion() {
    // containers are not plain objects
    assert!(!Value::array(vec![]).matches(&TypeTag::Object));
    // the error kinds are distinct identities
    assert!(!Value::type_error("t").matches(&TypeTag::Error));
    assert!(!Value::error("e").matches(&TypeTag::TypeError));
    // the sentinels do not match each other
    assert!(!Value::Null.matches(&TypeTag::Undefined));
    assert!(!Value::Undefined.matches(&TypeTag::Null));
    // instances are not plain objects
    assert!(!Value::instance("User", [("id", Value::number(1.0))]).matches(&TypeTag::Object));
}

#[test]
fn host_only_tags_match_nothing() {
    let values = [
        Value::Null,
        Value::Undefined,
        Value::object([("k", Value::Null)]),
        Value::string("img"),
        Value::instance("HtmlImageElement", [("src", Value::string("x"))]),
    ];
    for value in &values {
        assert!(!value.matches(&TypeTag::HtmlImageElement));
        assert!(!value.matches(&TypeTag::HtmlOptionElement));
    }
}

#[test]
fn instances_match_their_class_by_name() {
    let user = Value::instance("User", [("id", Value::number(1.0))]);
    assert!(user.matches(&TypeTag::class("User")));
    assert!(!user.matches(&TypeTag::class("Account")));
}

#[test]
fn display_is_human_readable() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Undefined.to_string(), "undefined");
    assert_eq!(Value::number(42.0).to_string(), "42");
    assert_eq!(Value::string("hi").to_string(), "hi");
    assert_eq!(
        Value::array(vec![Value::number(1.0), Value::string("a")]).to_string(),
        "[1, a]"
    );
    assert_eq!(Value::function("run").to_string(), "<function run>");
    assert_eq!(Value::regexp("a+").to_string(), "/a+/");
    assert_eq!(Value::error("boom").to_string(), "<error: boom>");
    assert_eq!(Value::type_error("bad").to_string(), "<typeError: bad>");
    assert_eq!(
        Value::instance("User", [("id", Value::number(1.0))]).to_string(),
        "<User instance>"
    );
}
