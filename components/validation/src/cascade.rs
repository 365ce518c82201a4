//! Composite validation: required, then type, then allowable.

use core_types::{CheckError, CheckResult, Value};

use crate::check::{allowable_stage, check_name, check_spec, missing_stage, type_stage};
use crate::options::{AllowableOptions, RequiredOptions, Stage, TypeOptions};

/// Run the enabled checks in fixed order and stop at the first failure.
///
/// All stage options are validated before `value` is looked at, so a
/// misconfigured later stage is reported even when an earlier stage would
/// have failed.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, Value};
/// use type_classifier::ExtendedCategory;
/// use validation::{validate, Allowed, TypeOptions};
///
/// let non_negative = Allowed::predicate(|v| v.to_number() >= 0.0);
/// let age = |v: &Value| {
///     validate(
///         v,
///         "age",
///         true,
///         TypeOptions::new(ExtendedCategory::LikeNumber),
///         non_negative.clone(),
///     )
/// };
///
/// assert!(age(&Value::string("42")).is_ok());
/// assert_eq!(age(&Value::string("-5")).unwrap_err().kind, ErrorKind::NotAllowed);
/// assert_eq!(age(&Value::undefined()).unwrap_err().kind, ErrorKind::MissingParameter);
/// ```
pub fn validate(
    value: &Value,
    name: &str,
    required: impl Into<Stage<RequiredOptions>>,
    type_check: impl Into<Stage<TypeOptions>>,
    allowable: impl Into<Stage<AllowableOptions>>,
) -> CheckResult<()> {
    check_name(name)?;

    let required = match required.into() {
        Stage::Off => None,
        Stage::On => Some(RequiredOptions::default()),
        Stage::With(options) => Some(options),
    };
    let type_check = match type_check.into() {
        Stage::Off => None,
        Stage::On => {
            return Err(CheckError::invalid_spec(
                "Missing required parameter: \"typeSpec\".",
            ))
        }
        Stage::With(options) => {
            check_spec(options.spec())?;
            Some(options)
        }
    };
    let allowable = match allowable.into() {
        Stage::Off => None,
        Stage::On => {
            return Err(CheckError::invalid_spec(
                "Missing required parameter: \"allowedValues\".",
            ))
        }
        Stage::With(options) => Some(options),
    };

    match &required {
        Some(options) => missing_stage(value, name, options)?,
        None => tracing::trace!(param = name, stage = "required", "stage disabled"),
    }
    match &type_check {
        Some(options) => type_stage(value, name, options)?,
        None => tracing::trace!(param = name, stage = "type", "stage disabled"),
    }
    match &allowable {
        Some(options) => allowable_stage(value, name, options)?,
        None => tracing::trace!(param = name, stage = "allowable", "stage disabled"),
    }
    Ok(())
}
