//! Per-stage options.
//!
//! Each check takes an immutable options value built for the call. The
//! composite cascade takes one [`Stage`] per check to switch it off, run it
//! with defaults, or run it with explicit options.

use core_types::{CheckError, CheckResult, TypeTag, Value};
use std::fmt;
use std::sync::Arc;
use type_classifier::{classify, matches, TypeSpec};

/// Options for the required check
#[derive(Debug, Clone, Default)]
pub struct RequiredOptions {
    message: Option<String>,
}

impl RequiredOptions {
    /// Default options: generated message
    pub fn new() -> Self {
        RequiredOptions::default()
    }

    /// Replace the generated message; an empty message is ignored
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Custom message, if set
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Options for the type check
#[derive(Debug, Clone)]
pub struct TypeOptions {
    spec: TypeSpec,
    exclude_undefined: bool,
    message: Option<String>,
}

impl TypeOptions {
    /// Check against `spec`, skipping `undefined` values
    pub fn new(spec: impl Into<TypeSpec>) -> Self {
        TypeOptions {
            spec: spec.into(),
            exclude_undefined: true,
            message: None,
        }
    }

    /// Also type-check `undefined` values instead of skipping them
    pub fn include_undefined(self) -> Self {
        self.exclude_undefined(false)
    }

    /// Set whether `undefined` values skip the check
    pub fn exclude_undefined(mut self, exclude: bool) -> Self {
        self.exclude_undefined = exclude;
        self
    }

    /// Replace the generated message; an empty message is ignored
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Expected types
    pub fn spec(&self) -> &TypeSpec {
        &self.spec
    }

    /// Whether `undefined` values skip the check
    pub fn excludes_undefined(&self) -> bool {
        self.exclude_undefined
    }

    /// Custom message, if set
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Predicate deciding whether a value is allowed
pub type AllowPredicate = dyn Fn(&Value) -> bool + Send + Sync;

/// The permitted values: an explicit list or a predicate.
#[derive(Clone)]
pub enum Allowed {
    /// Literal values, compared with SameValueZero
    Values(Vec<Value>),
    /// Arbitrary predicate; its values cannot be listed
    Predicate(Arc<AllowPredicate>),
}

impl Allowed {
    /// Allow exactly these values
    pub fn values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Allowed::Values(values.into_iter().map(Into::into).collect())
    }

    /// Allow whatever `predicate` accepts
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Allowed::Predicate(Arc::new(predicate))
    }

    /// Build from a host value: an array of literals or a function.
    ///
    /// A function is called with the checked value and its result's
    /// truthiness decides.
    pub fn from_value(value: &Value) -> CheckResult<Self> {
        if value.is_undefined() {
            return Err(CheckError::invalid_spec(
                "Missing required parameter: \"allowedValues\".",
            ));
        }
        if !matches(value, &TypeSpec::from([TypeTag::Array, TypeTag::Function])) {
            return Err(CheckError::invalid_spec(format!(
                "Expected parameter \"allowedValues\" to be Array|Function, got {}.",
                classify(value)
            )));
        }

        match value {
            Value::Function(function) => {
                let function = Arc::clone(function);
                Ok(Allowed::predicate(move |candidate| {
                    function.call(std::slice::from_ref(candidate)).is_truthy()
                }))
            }
            _ => Ok(Allowed::Values(
                value.as_array().map(<[Value]>::to_vec).unwrap_or_default(),
            )),
        }
    }

    /// Whether `value` is permitted
    pub fn permits(&self, value: &Value) -> bool {
        match self {
            Allowed::Values(values) => values.iter().any(|v| v.same_value_zero(value)),
            Allowed::Predicate(predicate) => predicate(value),
        }
    }

    /// `a|b|c` for lists; `None` for predicates
    pub fn listing(&self) -> Option<String> {
        match self {
            Allowed::Values(values) => Some(
                values
                    .iter()
                    .map(|v| match v {
                        Value::Undefined | Value::Null => String::new(),
                        other => other.to_js_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|"),
            ),
            Allowed::Predicate(_) => None,
        }
    }
}

impl fmt::Debug for Allowed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Allowed::Values(values) => f.debug_tuple("Values").field(values).finish(),
            Allowed::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Options for the allowable check
#[derive(Debug, Clone)]
pub struct AllowableOptions {
    allowed: Allowed,
    message: Option<String>,
}

impl AllowableOptions {
    /// Check membership in `allowed`
    pub fn new(allowed: Allowed) -> Self {
        AllowableOptions {
            allowed,
            message: None,
        }
    }

    /// Replace the generated message; an empty message is ignored
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Permitted values
    pub fn allowed(&self) -> &Allowed {
        &self.allowed
    }

    /// Custom message, if set
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// One stage of the cascade: off, on with defaults, or on with options.
#[derive(Debug, Clone, Default)]
pub enum Stage<T> {
    /// Stage disabled
    #[default]
    Off,
    /// Stage enabled with default options
    On,
    /// Stage enabled with explicit options
    With(T),
}

impl<T> From<bool> for Stage<T> {
    fn from(enabled: bool) -> Self {
        if enabled {
            Stage::On
        } else {
            Stage::Off
        }
    }
}

impl From<RequiredOptions> for Stage<RequiredOptions> {
    fn from(options: RequiredOptions) -> Self {
        Stage::With(options)
    }
}

impl From<TypeOptions> for Stage<TypeOptions> {
    fn from(options: TypeOptions) -> Self {
        Stage::With(options)
    }
}

impl From<TypeSpec> for Stage<TypeOptions> {
    fn from(spec: TypeSpec) -> Self {
        Stage::With(TypeOptions::new(spec))
    }
}

impl From<&str> for Stage<TypeOptions> {
    fn from(names: &str) -> Self {
        Stage::With(TypeOptions::new(names))
    }
}

impl From<AllowableOptions> for Stage<AllowableOptions> {
    fn from(options: AllowableOptions) -> Self {
        Stage::With(options)
    }
}

impl From<Allowed> for Stage<AllowableOptions> {
    fn from(allowed: Allowed) -> Self {
        Stage::With(AllowableOptions::new(allowed))
    }
}
