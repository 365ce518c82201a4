//! Integration test suite for the parameter checker
//!
//! These tests drive the classifier and the validation cascade together,
//! starting from host values built by hand or decoded from JSON.

use core_types::{CheckResult, Value};

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use type_classifier;
    pub use validation;
}

/// Look up `field` on an object payload; absent fields read as `undefined`
pub fn field(payload: &Value, field: &str) -> Value {
    payload.get(field).cloned().unwrap_or(Value::Undefined)
}

/// Run one check per field and collect every failure message
pub fn collect_failures<F>(payload: &Value, fields: &[&str], check: F) -> Vec<String>
where
    F: Fn(&Value, &str) -> CheckResult<()>,
{
    fields
        .iter()
        .filter_map(|name| check(&field(payload, name), name).err())
        .map(|err| err.message)
        .collect()
}
