//! Unit tests for the Value enum

use core_types::{FunctionObject, NativeType, PromiseState, TypeTag, Value};
use serde_json::json;
use std::sync::Arc;

#[cfg(test)]
mod value_creation_tests {
    use super::*;

    #[test]
    fn test_value_primitives() {
        assert!(matches!(Value::undefined(), Value::Undefined));
        assert!(matches!(Value::null(), Value::Null));
        assert!(matches!(Value::boolean(true), Value::Boolean(true)));
        assert!(matches!(Value::number(1.5), Value::Number(n) if n == 1.5));
        assert!(matches!(Value::string("x"), Value::String(ref s) if s == "x"));
    }

    #[test]
    fn test_value_from_conversions() {
        assert_eq!(Value::from(true), Value::boolean(true));
        assert_eq!(Value::from(7), Value::number(7.0));
        assert_eq!(Value::from("a"), Value::string("a"));
        let list = Value::from(vec![1, 2]);
        assert_eq!(list.as_array().map(<[Value]>::len), Some(2));
    }

    #[test]
    fn test_object_properties() {
        let obj = Value::object_from(vec![("id".to_string(), Value::number(9.0))]);
        assert_eq!(obj.get("id"), Some(&Value::number(9.0)));
        assert_eq!(obj.get("name"), None);
        assert_eq!(Value::array().get("length"), None);
    }
}

#[cfg(test)]
mod value_tag_tests {
    use super::*;

    #[test]
    fn test_native_tags_of_collections() {
        assert_eq!(Value::map_from(vec![]).native_tag(), TypeTag::Map);
        assert_eq!(Value::set_from(vec![]).native_tag(), TypeTag::Set);
        assert_eq!(Value::weak_map().native_tag(), TypeTag::WeakMap);
        assert_eq!(Value::weak_set().native_tag(), TypeTag::WeakSet);
        assert_eq!(Value::array_buffer(8).native_tag(), TypeTag::ArrayBuffer);
        assert_eq!(Value::promise(PromiseState::Pending).native_tag(), TypeTag::Promise);
    }

    #[test]
    fn test_class_instances_are_objects() {
        let point = Arc::new(FunctionObject::class("Point"));
        assert_eq!(Value::instance(&point, vec![]).native_tag(), TypeTag::Object);
        assert_eq!(Value::function(FunctionObject::class("Point")).native_tag(), TypeTag::Function);
    }

    #[test]
    fn test_is_callable_only_for_functions() {
        assert!(Value::function(FunctionObject::ordinary("f")).is_callable());
        assert!(Value::function(FunctionObject::native("parseInt")).is_callable());
        assert!(!Value::object().is_callable());
        assert!(!Value::undefined().is_callable());
    }

    #[test]
    fn test_type_of() {
        assert_eq!(Value::bigint(1).type_of(), "bigint");
        assert_eq!(Value::symbol(Some("s")).type_of(), "symbol");
        assert_eq!(Value::undefined().type_of(), "undefined");
    }
}

#[cfg(test)]
mod value_truthiness_tests {
    use super::*;

    #[test]
    fn test_falsy_values() {
        for value in [
            Value::undefined(),
            Value::null(),
            Value::boolean(false),
            Value::number(0.0),
            Value::number(-0.0),
            Value::nan(),
            Value::string(""),
            Value::bigint(0),
        ] {
            assert!(!value.is_truthy(), "{:?} should be falsy", value);
        }
    }

    #[test]
    fn test_truthy_values() {
        for value in [
            Value::string("0"),
            Value::number(-1.0),
            Value::object(),
            Value::array(),
            Value::function(FunctionObject::arrow("f")),
        ] {
            assert!(value.is_truthy(), "{:?} should be truthy", value);
        }
    }
}

#[cfg(test)]
mod value_json_tests {
    use super::*;

    #[test]
    fn test_nested_json_document() {
        let value = Value::from(json!({ "tags": ["a", null], "n": 2.5 }));
        assert_eq!(value.native_tag(), TypeTag::Object);
        let tags = value.get("tags").cloned().unwrap_or(Value::Undefined);
        assert_eq!(tags.to_js_string(), "a,");
        assert_eq!(value.get("n"), Some(&Value::number(2.5)));
    }
}

#[cfg(test)]
mod value_function_tests {
    use super::*;

    #[test]
    fn test_constructor_capabilities() {
        assert!(FunctionObject::ordinary("f").is_constructor());
        assert!(FunctionObject::class("C").is_constructor());
        assert!(FunctionObject::native_constructor(NativeType::Set).is_constructor());
        assert!(!FunctionObject::arrow("a").is_constructor());
        assert!(!FunctionObject::native("parseFloat").is_constructor());
    }

    #[test]
    fn test_lineage_walks_parents() {
        let base = Arc::new(FunctionObject::class("Base"));
        let mid = Arc::new(FunctionObject::class("Mid").extends(Arc::clone(&base)));
        let leaf = FunctionObject::class("Leaf").extends(mid);
        let names: Vec<_> = leaf.lineage().map(FunctionObject::name).collect();
        assert_eq!(names, vec!["Leaf", "Mid", "Base"]);
    }

    #[test]
    fn test_native_type_of_constructor() {
        let date = FunctionObject::native_constructor(NativeType::Date);
        assert_eq!(date.native_type(), Some(NativeType::Date));
        assert_eq!(date.name(), "Date");
        assert_eq!(FunctionObject::class("X").native_type(), None);
    }
}
