//! Parameter validation built on the type classifier
//!
//! Three checks, usable on their own or chained by [`validate`]:
//! - [`require_non_missing`] - the value is not `undefined`
//! - [`require_type`] - the value matches a [`TypeSpec`](type_classifier::TypeSpec)
//! - [`require_allowed`] - the value is in a list or accepted by a predicate
//!
//! Every failure is returned as a [`CheckError`](core_types::CheckError)
//! with a generated message naming the parameter, or the caller's own
//! message when one is given. Failed stages are logged at `debug` level
//! through `tracing`; no subscriber is installed here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cascade;
pub mod check;
pub mod options;

// Re-export main types for convenience
pub use cascade::validate;
pub use check::{require_allowed, require_non_missing, require_type};
pub use options::{AllowPredicate, AllowableOptions, Allowed, RequiredOptions, Stage, TypeOptions};
