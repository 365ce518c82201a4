//! Canonical type tags.
//!
//! A [`TypeTag`] is the single-word name a value reports for its runtime
//! kind, in the style of `Object.prototype.toString` (`"[object Map]"` yields
//! `Map`), plus the synthetic [`TypeTag::NaN`] which is carved out of
//! `Number` for not-a-number values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseTagError;

/// Canonical runtime kind of a value.
///
/// `Number` and `NaN` are mutually exclusive: a number that is not-a-number
/// is always tagged `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    /// `undefined`
    Undefined,
    /// `null`
    Null,
    /// `true` / `false`
    Boolean,
    /// Any number except NaN
    Number,
    /// Not-a-number
    NaN,
    /// Arbitrary precision integer
    BigInt,
    /// String primitive
    String,
    /// Symbol primitive
    Symbol,
    /// Plain object or class instance
    Object,
    /// Array
    Array,
    /// Function, including classes and built-in constructors
    Function,
    /// Map collection
    Map,
    /// Set collection
    Set,
    /// WeakMap collection
    WeakMap,
    /// WeakSet collection
    WeakSet,
    /// Date object
    Date,
    /// Regular expression
    RegExp,
    /// Promise
    Promise,
    /// Error object of any subtype
    Error,
    /// Raw binary buffer
    ArrayBuffer,
}

impl TypeTag {
    /// Every tag, in declaration order.
    pub const ALL: [TypeTag; 20] = [
        TypeTag::Undefined,
        TypeTag::Null,
        TypeTag::Boolean,
        TypeTag::Number,
        TypeTag::NaN,
        TypeTag::BigInt,
        TypeTag::String,
        TypeTag::Symbol,
        TypeTag::Object,
        TypeTag::Array,
        TypeTag::Function,
        TypeTag::Map,
        TypeTag::Set,
        TypeTag::WeakMap,
        TypeTag::WeakSet,
        TypeTag::Date,
        TypeTag::RegExp,
        TypeTag::Promise,
        TypeTag::Error,
        TypeTag::ArrayBuffer,
    ];

    /// The verbatim tag name, e.g. `"Array"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Undefined => "Undefined",
            TypeTag::Null => "Null",
            TypeTag::Boolean => "Boolean",
            TypeTag::Number => "Number",
            TypeTag::NaN => "NaN",
            TypeTag::BigInt => "BigInt",
            TypeTag::String => "String",
            TypeTag::Symbol => "Symbol",
            TypeTag::Object => "Object",
            TypeTag::Array => "Array",
            TypeTag::Function => "Function",
            TypeTag::Map => "Map",
            TypeTag::Set => "Set",
            TypeTag::WeakMap => "WeakMap",
            TypeTag::WeakSet => "WeakSet",
            TypeTag::Date => "Date",
            TypeTag::RegExp => "RegExp",
            TypeTag::Promise => "Promise",
            TypeTag::Error => "Error",
            TypeTag::ArrayBuffer => "ArrayBuffer",
        }
    }

    /// Look a tag up by its exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<TypeTag> {
        match name {
            "Undefined" => Some(TypeTag::Undefined),
            "Null" => Some(TypeTag::Null),
            "Boolean" => Some(TypeTag::Boolean),
            "Number" => Some(TypeTag::Number),
            "NaN" => Some(TypeTag::NaN),
            "BigInt" => Some(TypeTag::BigInt),
            "String" => Some(TypeTag::String),
            "Symbol" => Some(TypeTag::Symbol),
            "Object" => Some(TypeTag::Object),
            "Array" => Some(TypeTag::Array),
            "Function" => Some(TypeTag::Function),
            "Map" => Some(TypeTag::Map),
            "Set" => Some(TypeTag::Set),
            "WeakMap" => Some(TypeTag::WeakMap),
            "WeakSet" => Some(TypeTag::WeakSet),
            "Date" => Some(TypeTag::Date),
            "RegExp" => Some(TypeTag::RegExp),
            "Promise" => Some(TypeTag::Promise),
            "Error" => Some(TypeTag::Error),
            "ArrayBuffer" => Some(TypeTag::ArrayBuffer),
            _ => None,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::from_name(s).ok_or_else(|| ParseTagError(s.to_string()))
    }
}
