//! Specs and allow-lists supplied as host values rather than Rust types

use core_types::{ErrorKind, FunctionObject, NativeType, Value};
use std::sync::Arc;
use type_classifier::{matches, TypeSpec};
use validation::{require_allowed, require_type, validate, AllowableOptions, Allowed, TypeOptions};

fn shape_classes() -> (Arc<FunctionObject>, Arc<FunctionObject>) {
    let shape = Arc::new(FunctionObject::class("Shape"));
    let circle = Arc::new(FunctionObject::class("Circle").extends(Arc::clone(&shape)));
    (shape, circle)
}

#[test]
fn test_class_spec_from_host_value() {
    let (shape, circle) = shape_classes();
    let spec = TypeSpec::from_value(&Value::Function(Arc::clone(&shape))).unwrap();

    let unit = Value::instance(&circle, vec![("r".to_string(), Value::number(1.0))]);
    assert!(require_type(&unit, "shape", &TypeOptions::new(spec.clone())).is_ok());

    let err = require_type(&Value::object(), "shape", &TypeOptions::new(spec)).unwrap_err();
    assert_eq!(err.message, "Expected parameter \"shape\" to be Shape, got Object.");
}

#[test]
fn test_mixed_array_spec_from_host_value() {
    let (_, circle) = shape_classes();
    let host_spec = Value::array_from(vec![
        Value::string("Nil"),
        Value::Function(Arc::clone(&circle)),
        Value::function(FunctionObject::native_constructor(NativeType::Map)),
    ]);
    let spec = TypeSpec::from_value(&host_spec).unwrap();
    assert_eq!(spec.to_string(), "Nil|Circle|Map");

    assert!(matches(&Value::null(), &spec));
    assert!(matches(&Value::map_from(vec![]), &spec));
    assert!(matches(&Value::instance(&circle, vec![]), &spec));
    assert!(!matches(&Value::set_from(vec![]), &spec));
}

#[test]
fn test_error_subclasses_match_error_constructor() {
    let error_ctor = Arc::new(FunctionObject::native_constructor(NativeType::Error));
    let options = TypeOptions::new(error_ctor);
    let failure = Value::error(NativeType::RangeError, "out of range");
    assert!(require_type(&failure, "cause", &options).is_ok());
    assert!(require_type(&Value::string("out of range"), "cause", &options).is_err());
}

#[test]
fn test_invalid_host_spec_is_invalid_spec() {
    let err = TypeSpec::from_value(&Value::boolean(true)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidSpec);

    let err = Allowed::from_value(&Value::object()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidSpec);
    assert_eq!(
        err.message,
        "Expected parameter \"allowedValues\" to be Array|Function, got Object."
    );
}

#[test]
fn test_host_predicate_drives_allowable_stage() {
    let is_port = Value::function(FunctionObject::ordinary("isPort").with_body(|args| {
        let n = args.first().map_or(f64::NAN, Value::to_number);
        Value::boolean(n.fract() == 0.0 && (1.0..=65535.0).contains(&n))
    }));
    let allowed = Allowed::from_value(&is_port).unwrap();

    assert!(validate(&Value::string("8080"), "port", true, "LikeNumber", allowed.clone()).is_ok());
    let err = validate(&Value::number(70000.0), "port", true, "LikeNumber", allowed.clone())
        .unwrap_err();
    assert_eq!(err.message, "Invalid value for \"port\": \"70000\".");

    let options = AllowableOptions::new(allowed).with_message("port out of range");
    let err = require_allowed(&Value::number(0.0), "port", &options).unwrap_err();
    assert_eq!(err.message, "port out of range");
}
