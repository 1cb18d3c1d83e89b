//! Core traits for the validation system
//!
//! This module defines the trait every validator implements, plus the
//! extension trait that turns a rule into a stateful [`Validator`].

use super::error::{ValidationError, Violation};
use super::{ValidationResult, Value};
use super::template::MessageTemplates;
use super::validator::Validator;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// A rule is a pure function of the candidate value and its own fixed
/// configuration. It reports at most one [`Violation`]; rendering the
/// violation into a message goes through the type's [`TEMPLATES`] table.
///
/// [`TEMPLATES`]: Validate::TEMPLATES
///
/// # Examples
///
/// ```
/// use reportingcloud_validator::foundation::{ErrorCode, Validate};
/// use reportingcloud_validator::validators::ImageFormats;
/// use serde_json::json;
///
/// assert!(ImageFormats.validate(&json!("png")).is_ok());
///
/// let error = ImageFormats.validate(&json!("doc")).unwrap_err();
/// assert_eq!(error.code, ErrorCode::NotInArray);
/// ```
pub trait Validate {
    /// Name used in log events.
    const NAME: &'static str;

    /// Message templates for every code [`check`](Validate::check) can report.
    const TEMPLATES: MessageTemplates;

    /// Checks `value`, reporting the first violated constraint.
    fn check(&self, value: &Value) -> Result<(), Violation>;

    /// Checks `value` and renders any violation into a [`ValidationError`].
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        self.check(value)
            .map_err(|violation| ValidationError::render(Self::TEMPLATES, violation, value))
    }

    /// Validates anything convertible into a [`Value`].
    ///
    /// ```
    /// use reportingcloud_validator::foundation::Validate;
    /// use reportingcloud_validator::validators::ZoomFactor;
    ///
    /// assert!(ZoomFactor.validate_any(100).is_ok());
    /// assert!(ZoomFactor.validate_any("100").is_err());
    /// ```
    fn validate_any<T>(&self, value: T) -> ValidationResult<()>
    where
        Self: Sized,
        T: Into<Value>,
    {
        self.validate(&value.into())
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension methods available on every [`Validate`] implementation.
pub trait ValidateExt: Validate + Sized {
    /// Wraps the rule in a [`Validator`] that remembers its last outcome.
    ///
    /// ```
    /// use reportingcloud_validator::foundation::{ErrorCode, ValidateExt};
    /// use reportingcloud_validator::validators::TemplateExtension;
    ///
    /// let mut validator = TemplateExtension.into_validator();
    /// assert!(!validator.is_valid("template.doc"));
    /// assert!(validator.messages().contains_key(&ErrorCode::UnsupportedExtension));
    /// ```
    fn into_validator(self) -> Validator<Self> {
        Validator::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
