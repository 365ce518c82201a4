//! Validating decoded JSON request payloads field by field

use core_types::{ErrorKind, TypeTag, Value};
use integration_tests::{collect_failures, field};
use serde_json::json;
use type_classifier::{classify, ExtendedCategory, TypeSpec};
use validation::{validate, Allowed, TypeOptions};

fn signup() -> Value {
    Value::from(json!({
        "username": "ada",
        "age": "36",
        "plan": "pro",
        "referrer": null,
        "tags": ["math", "engines"]
    }))
}

#[test]
fn test_payload_shapes() {
    let payload = signup();
    assert_eq!(classify(&payload), TypeTag::Object);
    assert_eq!(classify(&field(&payload, "tags")), TypeTag::Array);
    assert_eq!(classify(&field(&payload, "referrer")), TypeTag::Null);
    assert_eq!(classify(&field(&payload, "missing")), TypeTag::Undefined);
}

#[test]
fn test_valid_signup_passes_every_field() {
    let payload = signup();
    validate(&field(&payload, "username"), "username", true, TypeOptions::new(ExtendedCategory::ValidString), false).unwrap();
    validate(
        &field(&payload, "age"),
        "age",
        true,
        TypeOptions::new(ExtendedCategory::LikeNumber),
        Allowed::predicate(|v| (13.0..=130.0).contains(&v.to_number())),
    )
    .unwrap();
    validate(&field(&payload, "plan"), "plan", false, "String", Allowed::values(["free", "pro"])).unwrap();
    validate(&field(&payload, "referrer"), "referrer", false, "String|Nil", false).unwrap();
    validate(&field(&payload, "tags"), "tags", false, "Array", false).unwrap();
}

#[test]
fn test_bad_payload_reports_each_field() {
    let payload = Value::from(json!({
        "username": "",
        "age": "abc",
        "plan": "enterprise"
    }));

    let failures = collect_failures(&payload, &["username", "age", "plan", "email"], |value, name| {
        let spec = match name {
            "username" => TypeSpec::from(ExtendedCategory::ValidString),
            "age" => TypeSpec::from(ExtendedCategory::LikeNumber),
            _ => TypeSpec::from(TypeTag::String),
        };
        let allowed = match name {
            "plan" => Allowed::values(["free", "pro"]),
            _ => Allowed::predicate(|_| true),
        };
        validate(value, name, true, spec, allowed)
    });

    assert_eq!(
        failures,
        vec![
            "Expected parameter \"username\" to be ValidString, got String.".to_string(),
            "Expected parameter \"age\" to be LikeNumber, got String.".to_string(),
            "Invalid value for \"plan\": \"enterprise\". Allowed values are: free|pro.".to_string(),
            "Missing required parameter: \"email\".".to_string(),
        ]
    );
}

#[test]
fn test_json_numbers_are_like_number_and_like_false() {
    let payload = Value::from(json!({ "count": 0, "ratio": -0.5, "limit": 10 }));
    let like_false = TypeSpec::from(ExtendedCategory::LikeFalse);
    let check = |name: &str| validate(&field(&payload, name), name, true, like_false.clone(), false);

    assert!(check("count").is_ok());
    assert!(check("ratio").is_ok());
    let err = check("limit").unwrap_err();
    assert_eq!(err.kind, ErrorKind::TypeMismatch);
    assert_eq!(err.message, "Expected parameter \"limit\" to be LikeFalse, got Number.");
}

#[test]
fn test_allowed_list_from_json_array() {
    let config = Value::from(json!({ "levels": ["debug", "info", "warn"], "level": "trace" }));
    let allowed = Allowed::from_value(&field(&config, "levels")).unwrap();
    let err = validate(&field(&config, "level"), "level", true, "String", allowed).unwrap_err();
    assert_eq!(
        err.message,
        "Invalid value for \"level\": \"trace\". Allowed values are: debug|info|warn."
    );
}
