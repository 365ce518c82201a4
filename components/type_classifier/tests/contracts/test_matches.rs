//! Contract tests for membership against type specs

use core_types::{FunctionObject, NativeType, Value};
use std::sync::Arc;
use type_classifier::{matches, ExtendedCategory, TypeSpec};

#[test]
fn test_like_false_members() {
    let spec = TypeSpec::from("LikeFalse");
    assert!(matches(&Value::string(""), &spec));
    assert!(matches(&Value::number(0.0), &spec));
    assert!(matches(&Value::boolean(false), &spec));
    assert!(!matches(&Value::number(1.0), &spec));
}

#[test]
fn test_like_number_members() {
    let spec = TypeSpec::from("LikeNumber");
    assert!(matches(&Value::string("123"), &spec));
    assert!(!matches(&Value::string(""), &spec));
    assert!(!matches(&Value::string("abc"), &spec));
}

#[test]
fn test_mixed_spec_is_logical_or() {
    let point = Arc::new(FunctionObject::class("Point"));
    let spec = TypeSpec::from("Null").with(ExtendedCategory::ValidString).with(Arc::clone(&point));

    assert!(matches(&Value::null(), &spec));
    assert!(matches(&Value::string("x"), &spec));
    assert!(matches(&Value::instance(&point, vec![]), &spec));
    assert!(!matches(&Value::string(""), &spec));
    assert!(!matches(&Value::undefined(), &spec));
}

#[test]
fn test_class_category_accepts_constructors_only() {
    let spec = TypeSpec::from("Class");
    let date = Value::function(FunctionObject::native_constructor(NativeType::Date));
    let point = Value::function(FunctionObject::class("Point"));
    let helper = Value::function(FunctionObject::ordinary("helper"));

    assert!(matches(&date, &spec));
    assert!(matches(&point, &spec));
    assert!(!matches(&helper, &spec));
    assert!(matches(&helper, &TypeSpec::from("Function")));
}

#[test]
fn test_native_and_custom_class_are_disjoint() {
    let native = TypeSpec::from("NativeClass");
    let custom = TypeSpec::from("CustomClass");
    let map = Value::function(FunctionObject::native_constructor(NativeType::Map));
    let point = Value::function(FunctionObject::class("Point"));

    assert!(matches(&map, &native) && !matches(&map, &custom));
    assert!(matches(&point, &custom) && !matches(&point, &native));
}
