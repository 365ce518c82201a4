//! Extended categories.
//!
//! Named predicates layered on top of the canonical tags. Each category maps
//! statically to one predicate function; names that are not categories are
//! simply not categories and never cause an error.

use core_types::number::string_to_number;
use core_types::{FunctionKind, TypeTag, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classify::classify;

/// A semantic category such as "looks like a number".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtendedCategory {
    /// Number, or non-empty string that converts to a number
    LikeNumber,
    /// Non-empty string
    ValidString,
    /// `undefined` or `null`
    Nil,
    /// `Nil` or NaN
    Invalid,
    /// `Invalid` or the empty string
    Void,
    /// `Void`, `false`, or a number `<= 0`
    LikeFalse,
    /// `NativeClass` or `CustomClass`
    Class,
    /// Built-in constructor such as `Map`
    NativeClass,
    /// User-defined `class`
    CustomClass,
}

impl ExtendedCategory {
    /// Every category, in declaration order.
    pub const ALL: [ExtendedCategory; 9] = [
        ExtendedCategory::LikeNumber,
        ExtendedCategory::ValidString,
        ExtendedCategory::Nil,
        ExtendedCategory::Invalid,
        ExtendedCategory::Void,
        ExtendedCategory::LikeFalse,
        ExtendedCategory::Class,
        ExtendedCategory::NativeClass,
        ExtendedCategory::CustomClass,
    ];

    /// The category name, e.g. `"LikeNumber"`
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtendedCategory::LikeNumber => "LikeNumber",
            ExtendedCategory::ValidString => "ValidString",
            ExtendedCategory::Nil => "Nil",
            ExtendedCategory::Invalid => "Invalid",
            ExtendedCategory::Void => "Void",
            ExtendedCategory::LikeFalse => "LikeFalse",
            ExtendedCategory::Class => "Class",
            ExtendedCategory::NativeClass => "NativeClass",
            ExtendedCategory::CustomClass => "CustomClass",
        }
    }

    /// Look a category up by exact name; unknown names yield `None`
    pub fn from_name(name: &str) -> Option<ExtendedCategory> {
        match name {
            "LikeNumber" => Some(ExtendedCategory::LikeNumber),
            "ValidString" => Some(ExtendedCategory::ValidString),
            "Nil" => Some(ExtendedCategory::Nil),
            "Invalid" => Some(ExtendedCategory::Invalid),
            "Void" => Some(ExtendedCategory::Void),
            "LikeFalse" => Some(ExtendedCategory::LikeFalse),
            "Class" => Some(ExtendedCategory::Class),
            "NativeClass" => Some(ExtendedCategory::NativeClass),
            "CustomClass" => Some(ExtendedCategory::CustomClass),
            _ => None,
        }
    }

    /// Evaluate the category's predicate
    pub fn test(&self, value: &Value) -> bool {
        match self {
            ExtendedCategory::LikeNumber => is_like_number(value),
            ExtendedCategory::ValidString => is_valid_string(value),
            ExtendedCategory::Nil => is_nil(value),
            ExtendedCategory::Invalid => is_invalid(value),
            ExtendedCategory::Void => is_void(value),
            ExtendedCategory::LikeFalse => is_like_false(value),
            ExtendedCategory::Class => is_class(value),
            ExtendedCategory::NativeClass => is_native_class(value),
            ExtendedCategory::CustomClass => is_custom_class(value),
        }
    }
}

impl fmt::Display for ExtendedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `123`, `"123.45"`, `" 0x1f "`; not `""`, `"abc"` or NaN
pub fn is_like_number(value: &Value) -> bool {
    match value {
        Value::Number(n) => !n.is_nan(),
        Value::String(s) => !s.is_empty() && !string_to_number(s).is_nan(),
        _ => false,
    }
}

/// Non-empty string
pub fn is_valid_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if !s.is_empty())
}

/// `undefined` or `null`
pub fn is_nil(value: &Value) -> bool {
    value.is_undefined() || value.is_null()
}

/// `undefined`, `null` or NaN
pub fn is_invalid(value: &Value) -> bool {
    is_nil(value) || value.is_nan()
}

/// `undefined`, `null`, NaN or `""`
pub fn is_void(value: &Value) -> bool {
    is_invalid(value) || matches!(value, Value::String(s) if s.is_empty())
}

/// `undefined`, `null`, NaN, `""`, `false`, or a number `<= 0`
pub fn is_like_false(value: &Value) -> bool {
    if is_void(value) || matches!(value, Value::Boolean(false)) {
        return true;
    }
    classify(value) == TypeTag::Number && value.as_number().is_some_and(|n| n <= 0.0)
}

/// Built-in constructor from the host's allow-list
pub fn is_native_class(value: &Value) -> bool {
    matches!(
        value.as_function().map(|f| f.kind()),
        Some(FunctionKind::NativeConstructor(_))
    )
}

/// Function declared with class syntax
pub fn is_custom_class(value: &Value) -> bool {
    value
        .as_function()
        .is_some_and(|f| f.is_class_declaration())
}

/// Native or custom class; plain functions and arrows are not classes
pub fn is_class(value: &Value) -> bool {
    is_custom_class(value) || is_native_class(value)
}
