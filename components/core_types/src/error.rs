//! Check error types.
//!
//! Every failed check surfaces as a single [`CheckError`] carrying a
//! human-readable message. The [`ErrorKind`] distinguishes which contract
//! was violated; the message is meant to be shown to end users as is.

use thiserror::Error;

/// The kind of check failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required value is absent (`undefined`)
    MissingParameter,
    /// The value does not satisfy the requested type spec
    TypeMismatch,
    /// The value is not among the permitted values
    NotAllowed,
    /// The engine itself was called with malformed arguments
    InvalidSpec,
}

impl ErrorKind {
    /// Get the kind name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::MissingParameter => "MissingParameterError",
            ErrorKind::TypeMismatch => "TypeMismatchError",
            ErrorKind::NotAllowed => "NotAllowedError",
            ErrorKind::InvalidSpec => "InvalidSpecError",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A failed check.
///
/// `Display` renders the message only, so callers can surface it directly.
///
/// # Examples
///
/// ```
/// use core_types::{CheckError, ErrorKind};
///
/// let error = CheckError::new(ErrorKind::MissingParameter, "Missing required parameter: \"id\".");
/// assert_eq!(error.to_string(), "Missing required parameter: \"id\".");
/// assert_eq!(error.kind, ErrorKind::MissingParameter);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CheckError {
    /// Which contract was violated
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl CheckError {
    /// Create a new check error
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        CheckError {
            kind,
            message: message.into(),
        }
    }

    /// Create a missing-parameter error
    pub fn missing(message: impl Into<String>) -> Self {
        CheckError::new(ErrorKind::MissingParameter, message)
    }

    /// Create a type-mismatch error
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        CheckError::new(ErrorKind::TypeMismatch, message)
    }

    /// Create a not-allowed error
    pub fn not_allowed(message: impl Into<String>) -> Self {
        CheckError::new(ErrorKind::NotAllowed, message)
    }

    /// Create an invalid-spec error
    pub fn invalid_spec(message: impl Into<String>) -> Self {
        CheckError::new(ErrorKind::InvalidSpec, message)
    }
}

/// Result type for checks
pub type CheckResult<T> = Result<T, CheckError>;

/// A string that names no [`TypeTag`](crate::TypeTag).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type tag: {0}")]
pub struct ParseTagError(pub String);

/// The right-hand side of an `instanceof` test cannot construct instances.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Function has non-object prototype 'undefined' in instanceof check: {target}")]
pub struct InstanceOfError {
    /// Name of the offending function
    pub target: String,
}
