//! Crate-level error type.
//!
//! Validators never raise on malformed input; their verdict is a value. This
//! type covers the two places where something does propagate: the hand-off
//! from a failed check to the request-building layer, and misuse of the
//! configurable validators.

use std::borrow::Cow;

use crate::foundation::{ErrorCode, ValidationError};

/// Errors raised by this crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A caller-supplied argument failed validation; no request was sent.
    #[error("invalid argument ({code}): {message}")]
    InvalidArgument {
        /// Code of the failed check.
        code: ErrorCode,
        /// Rendered message of the failed check.
        message: String,
    },

    /// Validator options are unusable (missing or inverted bounds).
    #[error("invalid validator options: {0}")]
    InvalidOptions(Cow<'static, str>),

    /// Validator options could not be deserialized.
    #[error("malformed validator options: {0}")]
    Options(#[from] serde_json::Error),
}

impl Error {
    /// Creates an [`Error::InvalidOptions`].
    pub fn invalid_options(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidOptions(reason.into())
    }

    /// The validation code, for [`Error::InvalidArgument`].
    #[must_use]
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::InvalidArgument { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Self {
        Self::InvalidArgument {
            code: error.code,
            message: error.message,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
