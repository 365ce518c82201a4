//! Host value representation.
//!
//! This module provides the [`Value`] enum that models every value the host
//! language can hand to the engine, along with function and class objects.
//! Values are immutable snapshots; reference kinds are shared through `Arc`
//! so identity comparisons are pointer comparisons and values can cross
//! threads freely.

use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};
use std::fmt;
use std::sync::Arc;

use crate::error::InstanceOfError;
use crate::number::{format_number, string_to_number};
use crate::TypeTag;

/// Signature of a native function body.
pub type NativeFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// Built-in constructors known to the host.
///
/// This is the allow-list behind the `NativeClass` category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
    /// `Object`
    Object,
    /// `Function`
    Function,
    /// `Array`
    Array,
    /// `Boolean`
    Boolean,
    /// `Number`
    Number,
    /// `String`
    String,
    /// `Symbol`
    Symbol,
    /// `BigInt`
    BigInt,
    /// `Map`
    Map,
    /// `Set`
    Set,
    /// `WeakMap`
    WeakMap,
    /// `WeakSet`
    WeakSet,
    /// `Date`
    Date,
    /// `RegExp`
    RegExp,
    /// `Promise`
    Promise,
    /// `Error`
    Error,
    /// `TypeError`
    TypeError,
    /// `RangeError`
    RangeError,
    /// `SyntaxError`
    SyntaxError,
    /// `ReferenceError`
    ReferenceError,
    /// `ArrayBuffer`
    ArrayBuffer,
}

impl NativeType {
    /// Constructor name as the host spells it
    pub fn name(&self) -> &'static str {
        match self {
            NativeType::Object => "Object",
            NativeType::Function => "Function",
            NativeType::Array => "Array",
            NativeType::Boolean => "Boolean",
            NativeType::Number => "Number",
            NativeType::String => "String",
            NativeType::Symbol => "Symbol",
            NativeType::BigInt => "BigInt",
            NativeType::Map => "Map",
            NativeType::Set => "Set",
            NativeType::WeakMap => "WeakMap",
            NativeType::WeakSet => "WeakSet",
            NativeType::Date => "Date",
            NativeType::RegExp => "RegExp",
            NativeType::Promise => "Promise",
            NativeType::Error => "Error",
            NativeType::TypeError => "TypeError",
            NativeType::RangeError => "RangeError",
            NativeType::SyntaxError => "SyntaxError",
            NativeType::ReferenceError => "ReferenceError",
            NativeType::ArrayBuffer => "ArrayBuffer",
        }
    }

    /// Whether this is `Error` or one of its subtypes
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            NativeType::Error
                | NativeType::TypeError
                | NativeType::RangeError
                | NativeType::SyntaxError
                | NativeType::ReferenceError
        )
    }

    /// Whether instances of `self` are also instances of `target`
    fn is_a(&self, target: NativeType) -> bool {
        *self == target
            || target == NativeType::Object
            || (target == NativeType::Error && self.is_error())
    }
}

/// How a function was defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// `function name() {}`: constructible, not a class
    Ordinary,
    /// `() => {}`: has no prototype
    Arrow,
    /// Built-in non-constructor such as `parseInt`
    Native,
    /// Built-in constructor such as `Map`
    NativeConstructor(NativeType),
    /// `class Name {}` declaration
    Class,
}

/// A callable value: plain function, arrow, built-in, or class.
pub struct FunctionObject {
    name: String,
    kind: FunctionKind,
    parent: Option<Arc<FunctionObject>>,
    body: Option<Arc<NativeFn>>,
}

impl FunctionObject {
    /// Create an ordinary `function`
    pub fn ordinary(name: impl Into<String>) -> Self {
        FunctionObject::with_kind(name, FunctionKind::Ordinary)
    }

    /// Create an arrow function
    pub fn arrow(name: impl Into<String>) -> Self {
        FunctionObject::with_kind(name, FunctionKind::Arrow)
    }

    /// Create a built-in non-constructor
    pub fn native(name: impl Into<String>) -> Self {
        FunctionObject::with_kind(name, FunctionKind::Native)
    }

    /// Create a built-in constructor
    pub fn native_constructor(native: NativeType) -> Self {
        FunctionObject::with_kind(native.name(), FunctionKind::NativeConstructor(native))
    }

    /// Create a user-defined class
    pub fn class(name: impl Into<String>) -> Self {
        FunctionObject::with_kind(name, FunctionKind::Class)
    }

    fn with_kind(name: impl Into<String>, kind: FunctionKind) -> Self {
        FunctionObject {
            name: name.into(),
            kind,
            parent: None,
            body: None,
        }
    }

    /// Set the `extends` parent
    pub fn extends(mut self, parent: Arc<FunctionObject>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Attach a native body, invoked by [`FunctionObject::call`]
    pub fn with_body<F>(mut self, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        self.body = Some(Arc::new(body));
        self
    }

    /// Declared name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How the function was defined
    pub fn kind(&self) -> FunctionKind {
        self.kind
    }

    /// The `extends` parent, if any
    pub fn parent(&self) -> Option<&Arc<FunctionObject>> {
        self.parent.as_ref()
    }

    /// Whether the function has a `prototype` and can be used with `new`
    pub fn is_constructor(&self) -> bool {
        !matches!(self.kind, FunctionKind::Arrow | FunctionKind::Native)
    }

    /// Whether the function was declared with class syntax
    pub fn is_class_declaration(&self) -> bool {
        self.kind == FunctionKind::Class
    }

    /// The built-in constructor this function is, if any
    pub fn native_type(&self) -> Option<NativeType> {
        match self.kind {
            FunctionKind::NativeConstructor(native) => Some(native),
            _ => None,
        }
    }

    /// Iterate over this function and its `extends` ancestors
    pub fn lineage(&self) -> impl Iterator<Item = &FunctionObject> {
        std::iter::successors(Some(self), |f| f.parent.as_deref())
    }

    /// Invoke the native body; a function without one returns `undefined`
    pub fn call(&self, args: &[Value]) -> Value {
        match &self.body {
            Some(body) => body(args),
            None => Value::Undefined,
        }
    }

    /// Source representation, as `Function.prototype.toString` prints it
    pub fn source_text(&self) -> String {
        match self.kind {
            FunctionKind::Native | FunctionKind::NativeConstructor(_) => {
                format!("function {}() {{ [native code] }}", self.name)
            }
            FunctionKind::Class => match &self.parent {
                Some(parent) => format!("class {} extends {} {{}}", self.name, parent.name),
                None => format!("class {} {{}}", self.name),
            },
            FunctionKind::Ordinary => format!("function {}() {{}}", self.name),
            FunctionKind::Arrow => "() => {}".to_string(),
        }
    }
}

impl fmt::Debug for FunctionObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionObject")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("parent", &self.parent.as_ref().map(|p| p.name.clone()))
            .finish()
    }
}

/// Symbol primitive; identity is the allocation
#[derive(Debug)]
pub struct SymbolData {
    /// Optional description given at creation
    pub description: Option<String>,
}

/// Plain object or class instance
#[derive(Debug, Default)]
pub struct ObjectData {
    /// Own enumerable properties in insertion order
    pub properties: Vec<(String, Value)>,
    /// Constructor the object was created with (`None` for literals)
    pub constructor: Option<Arc<FunctionObject>>,
}

/// Map / WeakMap entries in insertion order
#[derive(Debug, Default)]
pub struct MapData {
    /// Key/value pairs
    pub entries: Vec<(Value, Value)>,
}

/// Set / WeakSet values in insertion order
#[derive(Debug, Default)]
pub struct SetData {
    /// Members
    pub values: Vec<Value>,
}

/// Date object
#[derive(Debug)]
pub struct DateData {
    /// Milliseconds since the epoch; NaN for an invalid date
    pub time_value: f64,
}

/// Regular expression object
#[derive(Debug)]
pub struct RegExpData {
    /// Pattern source
    pub source: String,
    /// Flags such as `gi`
    pub flags: String,
}

/// Promise state
#[derive(Debug)]
pub enum PromiseState {
    /// Not yet settled
    Pending,
    /// Resolved with a value
    Fulfilled(Value),
    /// Rejected with a reason
    Rejected(Value),
}

/// Error object
#[derive(Debug)]
pub struct ErrorData {
    /// Error constructor that produced it
    pub kind: NativeType,
    /// Error message
    pub message: String,
}

/// Any host value.
///
/// # Examples
///
/// ```
/// use core_types::{TypeTag, Value};
///
/// let list = Value::array_from(vec![Value::number(1.0), Value::string("a")]);
/// assert_eq!(list.native_tag(), TypeTag::Array);
/// assert_eq!(list.type_of(), "object");
/// assert_eq!(list.to_js_string(), "1,a");
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// undefined
    Undefined,
    /// null
    Null,
    /// Boolean value
    Boolean(bool),
    /// Number (IEEE 754 double), NaN included
    Number(f64),
    /// BigInt value
    BigInt(BigInt),
    /// String value
    String(String),
    /// Symbol value
    Symbol(Arc<SymbolData>),
    /// Plain object or class instance
    Object(Arc<ObjectData>),
    /// Array
    Array(Arc<Vec<Value>>),
    /// Function, arrow, built-in or class
    Function(Arc<FunctionObject>),
    /// Map collection
    Map(Arc<MapData>),
    /// Set collection
    Set(Arc<SetData>),
    /// WeakMap collection
    WeakMap(Arc<MapData>),
    /// WeakSet collection
    WeakSet(Arc<SetData>),
    /// Date object
    Date(Arc<DateData>),
    /// RegExp object
    RegExp(Arc<RegExpData>),
    /// Promise object
    Promise(Arc<PromiseState>),
    /// Error object
    Error(Arc<ErrorData>),
    /// ArrayBuffer object
    ArrayBuffer(Arc<Vec<u8>>),
}

impl Value {
    /// Create undefined value
    pub fn undefined() -> Self {
        Value::Undefined
    }

    /// Create null value
    pub fn null() -> Self {
        Value::Null
    }

    /// Create boolean value
    pub fn boolean(v: bool) -> Self {
        Value::Boolean(v)
    }

    /// Create number value
    pub fn number(v: f64) -> Self {
        Value::Number(v)
    }

    /// Create NaN
    pub fn nan() -> Self {
        Value::Number(f64::NAN)
    }

    /// Create BigInt value
    pub fn bigint(v: impl Into<BigInt>) -> Self {
        Value::BigInt(v.into())
    }

    /// Create string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a fresh symbol
    pub fn symbol(description: Option<&str>) -> Self {
        Value::Symbol(Arc::new(SymbolData {
            description: description.map(str::to_string),
        }))
    }

    /// Create empty object literal
    pub fn object() -> Self {
        Value::Object(Arc::new(ObjectData::default()))
    }

    /// Create object literal from properties
    pub fn object_from(properties: Vec<(String, Value)>) -> Self {
        Value::Object(Arc::new(ObjectData {
            properties,
            constructor: None,
        }))
    }

    /// Create an instance as `new constructor()` would
    pub fn instance(constructor: &Arc<FunctionObject>, properties: Vec<(String, Value)>) -> Self {
        Value::Object(Arc::new(ObjectData {
            properties,
            constructor: Some(Arc::clone(constructor)),
        }))
    }

    /// Create empty array
    pub fn array() -> Self {
        Value::Array(Arc::new(Vec::new()))
    }

    /// Create array from values
    pub fn array_from(values: Vec<Value>) -> Self {
        Value::Array(Arc::new(values))
    }

    /// Wrap a function object
    pub fn function(function: FunctionObject) -> Self {
        Value::Function(Arc::new(function))
    }

    /// Create a Map from entries
    pub fn map_from(entries: Vec<(Value, Value)>) -> Self {
        Value::Map(Arc::new(MapData { entries }))
    }

    /// Create a Set from values
    pub fn set_from(values: Vec<Value>) -> Self {
        Value::Set(Arc::new(SetData { values }))
    }

    /// Create an empty WeakMap
    pub fn weak_map() -> Self {
        Value::WeakMap(Arc::new(MapData::default()))
    }

    /// Create an empty WeakSet
    pub fn weak_set() -> Self {
        Value::WeakSet(Arc::new(SetData::default()))
    }

    /// Create a Date from milliseconds since the epoch
    pub fn date(time_value: f64) -> Self {
        Value::Date(Arc::new(DateData { time_value }))
    }

    /// Create a RegExp
    pub fn regexp(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Value::RegExp(Arc::new(RegExpData {
            source: source.into(),
            flags: flags.into(),
        }))
    }

    /// Create a Promise in the given state
    pub fn promise(state: PromiseState) -> Self {
        Value::Promise(Arc::new(state))
    }

    /// Create an Error of the given subtype
    pub fn error(kind: NativeType, message: impl Into<String>) -> Self {
        Value::Error(Arc::new(ErrorData {
            kind,
            message: message.into(),
        }))
    }

    /// Create a zero-filled ArrayBuffer
    pub fn array_buffer(byte_length: usize) -> Self {
        Value::ArrayBuffer(Arc::new(vec![0; byte_length]))
    }

    /// Check if value is undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value is the number NaN
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    /// Check if value is a function of any kind
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as function object
    pub fn as_function(&self) -> Option<&Arc<FunctionObject>> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Get array elements
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get own property of an object
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(obj) => obj
                .properties
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Structural tag, as `Object.prototype.toString` reports it.
    ///
    /// NaN is reported as `Number` here; the classifier carves it out.
    pub fn native_tag(&self) -> TypeTag {
        match self {
            Value::Undefined => TypeTag::Undefined,
            Value::Null => TypeTag::Null,
            Value::Boolean(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::BigInt(_) => TypeTag::BigInt,
            Value::String(_) => TypeTag::String,
            Value::Symbol(_) => TypeTag::Symbol,
            Value::Object(_) => TypeTag::Object,
            Value::Array(_) => TypeTag::Array,
            Value::Function(_) => TypeTag::Function,
            Value::Map(_) => TypeTag::Map,
            Value::Set(_) => TypeTag::Set,
            Value::WeakMap(_) => TypeTag::WeakMap,
            Value::WeakSet(_) => TypeTag::WeakSet,
            Value::Date(_) => TypeTag::Date,
            Value::RegExp(_) => TypeTag::RegExp,
            Value::Promise(_) => TypeTag::Promise,
            Value::Error(_) => TypeTag::Error,
            Value::ArrayBuffer(_) => TypeTag::ArrayBuffer,
        }
    }

    /// Get the type of the value (as JavaScript typeof would return)
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object", // typeof null === "object"
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
            _ => "object",
        }
    }

    /// The built-in type a reference value was created as; `None` for primitives
    pub fn native_type(&self) -> Option<NativeType> {
        match self {
            Value::Undefined
            | Value::Null
            | Value::Boolean(_)
            | Value::Number(_)
            | Value::BigInt(_)
            | Value::String(_)
            | Value::Symbol(_) => None,
            Value::Object(_) => Some(NativeType::Object),
            Value::Array(_) => Some(NativeType::Array),
            Value::Function(_) => Some(NativeType::Function),
            Value::Map(_) => Some(NativeType::Map),
            Value::Set(_) => Some(NativeType::Set),
            Value::WeakMap(_) => Some(NativeType::WeakMap),
            Value::WeakSet(_) => Some(NativeType::WeakSet),
            Value::Date(_) => Some(NativeType::Date),
            Value::RegExp(_) => Some(NativeType::RegExp),
            Value::Promise(_) => Some(NativeType::Promise),
            Value::Error(err) => Some(err.kind),
            Value::ArrayBuffer(_) => Some(NativeType::ArrayBuffer),
        }
    }

    /// `value instanceof constructor`.
    ///
    /// Fails when `constructor` has no prototype (arrows and built-in
    /// non-constructors), mirroring the host's `TypeError`.
    pub fn instance_of(&self, constructor: &FunctionObject) -> Result<bool, InstanceOfError> {
        if !constructor.is_constructor() {
            return Err(InstanceOfError {
                target: constructor.name().to_string(),
            });
        }

        let Some(own) = self.native_type() else {
            return Ok(false);
        };

        let lineage_has = |pred: &dyn Fn(&FunctionObject) -> bool| match self {
            Value::Object(obj) => obj
                .constructor
                .as_deref()
                .is_some_and(|ctor| ctor.lineage().any(pred)),
            _ => false,
        };

        match constructor.kind() {
            FunctionKind::NativeConstructor(target) => Ok(own.is_a(target)
                || lineage_has(&|f| f.native_type().is_some_and(|n| n.is_a(target)))),
            _ => Ok(lineage_has(&|f| std::ptr::eq(f, constructor))),
        }
    }

    /// Returns whether this value is truthy in JavaScript semantics.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => !n.is_nan() && *n != 0.0,
            Value::BigInt(n) => !n.is_zero(),
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Convert to number as `Number(value)` does.
    ///
    /// Symbols, which the host refuses to convert, yield NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => *n,
            Value::BigInt(n) => n.to_f64().unwrap_or(f64::NAN),
            Value::String(s) => string_to_number(s),
            Value::Date(date) => date.time_value,
            Value::Array(_) => string_to_number(&self.to_js_string()),
            _ => f64::NAN,
        }
    }

    /// Convert to string as `String(value)` does.
    pub fn to_js_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::BigInt(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Symbol(sym) => {
                format!("Symbol({})", sym.description.as_deref().unwrap_or(""))
            }
            Value::Object(_) => "[object Object]".to_string(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Undefined | Value::Null => String::new(),
                    other => other.to_js_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Function(f) => f.source_text(),
            Value::Map(_) => "[object Map]".to_string(),
            Value::Set(_) => "[object Set]".to_string(),
            Value::WeakMap(_) => "[object WeakMap]".to_string(),
            Value::WeakSet(_) => "[object WeakSet]".to_string(),
            Value::Date(date) => format_date(date.time_value),
            Value::RegExp(re) => format!("/{}/{}", re.source, re.flags),
            Value::Promise(_) => "[object Promise]".to_string(),
            Value::Error(err) => {
                if err.message.is_empty() {
                    err.kind.name().to_string()
                } else {
                    format!("{}: {}", err.kind.name(), err.message)
                }
            }
            Value::ArrayBuffer(_) => "[object ArrayBuffer]".to_string(),
        }
    }

    /// Strict equality (`===`): NaN is unequal to itself, references compare by identity
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            _ => self.same_primitive_or_reference(other),
        }
    }

    /// SameValueZero, the comparison behind `Array.prototype.includes`.
    ///
    /// Like [`Value::strict_equals`] but NaN equals NaN.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => (a.is_nan() && b.is_nan()) || a == b,
            _ => self.same_primitive_or_reference(other),
        }
    }

    fn same_primitive_or_reference(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => Arc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Arc::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Arc::ptr_eq(a, b),
            (Value::Set(a), Value::Set(b)) => Arc::ptr_eq(a, b),
            (Value::WeakMap(a), Value::WeakMap(b)) => Arc::ptr_eq(a, b),
            (Value::WeakSet(a), Value::WeakSet(b)) => Arc::ptr_eq(a, b),
            (Value::Date(a), Value::Date(b)) => Arc::ptr_eq(a, b),
            (Value::RegExp(a), Value::RegExp(b)) => Arc::ptr_eq(a, b),
            (Value::Promise(a), Value::Promise(b)) => Arc::ptr_eq(a, b),
            (Value::Error(a), Value::Error(b)) => Arc::ptr_eq(a, b),
            (Value::ArrayBuffer(a), Value::ArrayBuffer(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Arc<FunctionObject>> for Value {
    fn from(v: Arc<FunctionObject>) -> Self {
        Value::Function(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::array_from(v.into_iter().map(Into::into).collect())
    }
}

fn format_date(time_value: f64) -> String {
    if !time_value.is_finite() {
        return "Invalid Date".to_string();
    }
    match DateTime::<Utc>::from_timestamp_millis(time_value as i64) {
        Some(dt) => dt
            .format("%a %b %d %Y %H:%M:%S GMT+0000 (Coordinated Universal Time)")
            .to_string(),
        None => "Invalid Date".to_string(),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_js_string())
    }
}
