//! Core host value types and error handling.
//!
//! This crate provides the foundational types for the type classification
//! and validation engine: the host value model, canonical type tags, and the
//! error returned by every failed check.
//!
//! # Overview
//!
//! - [`Value`] - Host values, from `undefined` to class instances
//! - [`FunctionObject`] - Functions, built-in constructors and classes
//! - [`TypeTag`] - Canonical single-word runtime kinds, including `NaN`
//! - [`CheckError`] - A failed check with a user-facing message
//! - [`ErrorKind`] - Which contract a check error violated
//!
//! # Examples
//!
//! ```
//! use core_types::{CheckError, ErrorKind, TypeTag, Value};
//!
//! let num = Value::number(42.0);
//! assert!(num.is_truthy());
//! assert_eq!(num.type_of(), "number");
//! assert_eq!(num.native_tag(), TypeTag::Number);
//!
//! let error = CheckError::new(ErrorKind::MissingParameter, "Missing required parameter: \"id\".");
//! assert_eq!(error.kind, ErrorKind::MissingParameter);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod json;
pub mod number;
mod tag;
mod value;

pub use error::{CheckError, CheckResult, ErrorKind, InstanceOfError, ParseTagError};
pub use tag::TypeTag;
pub use value::{
    DateData, ErrorData, FunctionKind, FunctionObject, MapData, NativeFn, NativeType, ObjectData,
    PromiseState, RegExpData, SetData, SymbolData, Value,
};
