//! Canonical tag resolution and single-kind predicates.

use core_types::{TypeTag, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical type tag of a value.
///
/// Same as [`Value::native_tag`] except that a not-a-number value is tagged
/// [`TypeTag::NaN`] rather than [`TypeTag::Number`].
///
/// # Examples
///
/// ```
/// use core_types::{TypeTag, Value};
/// use type_classifier::classify;
///
/// assert_eq!(classify(&Value::number(5.0)), TypeTag::Number);
/// assert_eq!(classify(&Value::nan()), TypeTag::NaN);
/// assert_eq!(classify(&Value::array()), TypeTag::Array);
/// assert_eq!(classify(&Value::object()), TypeTag::Object);
/// ```
pub fn classify(value: &Value) -> TypeTag {
    if value.is_nan() {
        return TypeTag::NaN;
    }
    value.native_tag()
}

/// Whether a value is stored inline or by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageClass {
    /// Primitive: numbers, strings, booleans, bigints, symbols, undefined, null, NaN
    Basic,
    /// Objects and functions
    Reference,
}

impl StorageClass {
    /// `"basic"` or `"reference"`
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageClass::Basic => "basic",
            StorageClass::Reference => "reference",
        }
    }
}

impl fmt::Display for StorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Basic-vs-reference classification.
///
/// `null` is basic here even though `typeof null` says `"object"`.
pub fn storage_class(value: &Value) -> StorageClass {
    match classify(value) {
        TypeTag::Undefined
        | TypeTag::Null
        | TypeTag::Boolean
        | TypeTag::Number
        | TypeTag::NaN
        | TypeTag::BigInt
        | TypeTag::String
        | TypeTag::Symbol => StorageClass::Basic,
        _ => StorageClass::Reference,
    }
}

/// Whether two values have the same canonical tag
pub fn is_type_equal(a: &Value, b: &Value) -> bool {
    classify(a) == classify(b)
}

/// Number, excluding NaN
pub fn is_number(value: &Value) -> bool {
    classify(value) == TypeTag::Number
}

/// Boolean
pub fn is_boolean(value: &Value) -> bool {
    classify(value) == TypeTag::Boolean
}

/// String
pub fn is_string(value: &Value) -> bool {
    classify(value) == TypeTag::String
}

/// Array
pub fn is_array(value: &Value) -> bool {
    classify(value) == TypeTag::Array
}

/// Plain object or class instance; arrays, maps and functions are not objects here
pub fn is_object(value: &Value) -> bool {
    classify(value) == TypeTag::Object
}

/// Any function, class or built-in constructor
pub fn is_function(value: &Value) -> bool {
    value.is_callable()
}

/// Exactly `null`
pub fn is_null(value: &Value) -> bool {
    value.is_null()
}

/// Exactly `undefined`
pub fn is_undefined(value: &Value) -> bool {
    value.is_undefined()
}

/// The number NaN
pub fn is_nan(value: &Value) -> bool {
    classify(value) == TypeTag::NaN
}
