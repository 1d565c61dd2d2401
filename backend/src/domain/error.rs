//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps them to
//! status codes and response bodies; the domain only records which failure
//! tier occurred and the human-readable detail that tier permits.

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The submission failed one or more validation rules.
    ValidationFailed,
    /// An unexpected error occurred inside the domain or its collaborators.
    InternalError,
}

/// Domain error payload.
///
/// For [`ErrorCode::ValidationFailed`] the message holds the joined
/// violation detail and is safe to show to callers. For
/// [`ErrorCode::InternalError`] the message is internal diagnostic text;
/// adapters must never expose it.
///
/// # Examples
/// ```
/// use feedback_backend::domain::{Error, ErrorCode};
///
/// let err = Error::internal("pool exhausted");
/// assert_eq!(err.code(), ErrorCode::InternalError);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message; caller-visible only for validation failures.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::ValidationFailed`].
    ///
    /// The message may be empty: an empty violation set still reports a
    /// validation failure with empty detail.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
