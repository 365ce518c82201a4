//! Runtime type classification for host values
//!
//! This crate determines the canonical type of a value and tests it against a
//! caller-declared [`TypeSpec`]:
//! - [`classify`] - canonical [`TypeTag`](core_types::TypeTag), with NaN carved out of Number
//! - [`storage_class`] - basic vs reference storage
//! - [`ExtendedCategory`] - semantic categories such as `LikeNumber` or `LikeFalse`
//! - [`matches`] - membership against tags, categories and classes
//!
//! Nothing in this crate logs or mutates shared state, so any function may be
//! called speculatively from anywhere.
//!
//! # Example
//!
//! ```
//! use core_types::{TypeTag, Value};
//! use type_classifier::{classify, matches, ExtendedCategory, TypeSpec};
//!
//! let input = Value::string("42");
//! assert_eq!(classify(&input), TypeTag::String);
//! assert!(matches(&input, &TypeSpec::from(ExtendedCategory::LikeNumber)));
//! assert!(!matches(&input, &TypeSpec::from(TypeTag::Number)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod classify;
pub mod membership;
pub mod spec;

// Re-export main types for convenience
pub use category::ExtendedCategory;
pub use classify::{classify, is_type_equal, storage_class, StorageClass};
pub use membership::{matches, matches_extended, not_matches};
pub use spec::{TypeSpec, TypeSpecEntry};
