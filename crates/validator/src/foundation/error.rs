//! Violations and rendered validation errors.
//!
//! A rule reports a [`Violation`]: the failing [`ErrorCode`] plus whatever
//! template parameters it knows about (range bounds, expected length). The
//! violation is turned into a [`ValidationError`] by rendering it through the
//! owning validator's message templates.

use std::fmt;

use smallvec::SmallVec;

use super::code::ErrorCode;
use super::template::{self, MessageTemplates};
use super::Value;

/// Template parameters carried by a violation.
///
/// Stored as ordered key-value pairs; no validator uses more than three.
pub type Params = SmallVec<[(&'static str, String); 3]>;

// ============================================================================
// VIOLATION
// ============================================================================

/// An unrendered validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The failure class.
    pub code: ErrorCode,
    /// Parameters substituted into the message template (`%key%`).
    pub params: Params,
}

impl Violation {
    /// Creates a violation without parameters.
    #[must_use]
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            params: Params::new(),
        }
    }

    /// Adds a template parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl From<ErrorCode> for Violation {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A violation rendered into a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The failure class.
    pub code: ErrorCode,
    /// Message with the offending value interpolated.
    pub message: String,
    /// Parameters the message was rendered with.
    pub params: Params,
}

impl ValidationError {
    /// Renders `violation` for `value` through `templates`.
    #[must_use]
    pub fn render(templates: MessageTemplates, violation: Violation, value: &Value) -> Self {
        let message = template::render(templates, &violation, value);
        Self {
            code: violation.code,
            message,
            params: violation.params,
        }
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}
