//! The three individual checks.
//!
//! Each public check validates its own parameters before looking at the
//! caller's value. Those self-checks call the classifier directly, and the
//! cascade reuses the unchecked `*_stage` functions, so no entry point
//! re-enters its own parameter validation. Self-check failures are logged
//! under the `self` stage.

use core_types::{CheckError, CheckResult, Value};
use type_classifier::{classify, matches, ExtendedCategory, TypeSpec};

use crate::options::{AllowableOptions, Allowed, RequiredOptions, TypeOptions};

/// Fail with `MissingParameter` when `value` is `undefined`.
///
/// `null`, NaN and `""` are present values and pass.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, Value};
/// use validation::{require_non_missing, RequiredOptions};
///
/// let options = RequiredOptions::new();
/// assert!(require_non_missing(&Value::null(), "id", &options).is_ok());
///
/// let err = require_non_missing(&Value::undefined(), "id", &options).unwrap_err();
/// assert_eq!(err.kind, ErrorKind::MissingParameter);
/// assert_eq!(err.to_string(), "Missing required parameter: \"id\".");
/// ```
pub fn require_non_missing(value: &Value, name: &str, options: &RequiredOptions) -> CheckResult<()> {
    check_name(name)?;
    missing_stage(value, name, options)
}

/// Fail with `TypeMismatch` unless `value` matches the options' spec.
///
/// `undefined` skips the check unless the options include it.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use validation::{require_type, TypeOptions};
///
/// let options = TypeOptions::new("String");
/// assert!(require_type(&Value::undefined(), "x", &options).is_ok());
///
/// let err = require_type(&Value::number(5.0), "x", &options).unwrap_err();
/// assert_eq!(err.message, "Expected parameter \"x\" to be String, got Number.");
/// ```
pub fn require_type(value: &Value, name: &str, options: &TypeOptions) -> CheckResult<()> {
    check_name(name)?;
    check_spec(options.spec())?;
    type_stage(value, name, options)
}

/// Fail with `NotAllowed` unless `value` is permitted by the options.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use validation::{require_allowed, AllowableOptions, Allowed};
///
/// let options = AllowableOptions::new(Allowed::values([1, 2, 3]));
/// assert!(require_allowed(&Value::number(3.0), "x", &options).is_ok());
///
/// let err = require_allowed(&Value::number(4.0), "x", &options).unwrap_err();
/// assert_eq!(
///     err.message,
///     "Invalid value for \"x\": \"4\". Allowed values are: 1|2|3."
/// );
/// ```
pub fn require_allowed(value: &Value, name: &str, options: &AllowableOptions) -> CheckResult<()> {
    check_name(name)?;
    allowable_stage(value, name, options)
}

/// The parameter name must itself be a non-empty string.
pub(crate) fn check_name(name: &str) -> CheckResult<()> {
    let name = Value::string(name);
    if ExtendedCategory::ValidString.test(&name) {
        return Ok(());
    }
    let message = format!(
        "Expected parameter \"name\" to be {}, got {}.",
        ExtendedCategory::ValidString,
        classify(&name)
    );
    fail("self", "name", CheckError::invalid_spec(message))
}

pub(crate) fn check_spec(spec: &TypeSpec) -> CheckResult<()> {
    if spec.is_empty() {
        return Err(CheckError::invalid_spec(
            "Parameter \"typeSpec\" must name at least one type.",
        ));
    }
    Ok(())
}

pub(crate) fn missing_stage(value: &Value, name: &str, options: &RequiredOptions) -> CheckResult<()> {
    if !value.is_undefined() {
        return Ok(());
    }
    let message = custom_or(options.message(), || {
        format!("Missing required parameter: \"{}\".", name)
    });
    fail("required", name, CheckError::missing(message))
}

pub(crate) fn type_stage(value: &Value, name: &str, options: &TypeOptions) -> CheckResult<()> {
    if options.excludes_undefined() && value.is_undefined() {
        tracing::trace!(param = name, "type check skipped for undefined value");
        return Ok(());
    }
    if matches(value, options.spec()) {
        return Ok(());
    }
    let message = custom_or(options.message(), || {
        format!(
            "Expected parameter \"{}\" to be {}, got {}.",
            name,
            options.spec(),
            classify(value)
        )
    });
    fail("type", name, CheckError::type_mismatch(message))
}

pub(crate) fn allowable_stage(
    value: &Value,
    name: &str,
    options: &AllowableOptions,
) -> CheckResult<()> {
    let allowed: &Allowed = options.allowed();
    if allowed.permits(value) {
        return Ok(());
    }
    let message = custom_or(options.message(), || {
        let mut message = format!("Invalid value for \"{}\": \"{}\".", name, value.to_js_string());
        if let Some(listing) = allowed.listing() {
            message.push_str(&format!(" Allowed values are: {}.", listing));
        }
        message
    });
    fail("allowable", name, CheckError::not_allowed(message))
}

fn custom_or(custom: Option<&str>, generated: impl FnOnce() -> String) -> String {
    match custom {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => generated(),
    }
}

fn fail(stage: &'static str, name: &str, err: CheckError) -> CheckResult<()> {
    tracing::debug!(param = name, stage, kind = %err.kind, "check failed");
    Err(err)
}
