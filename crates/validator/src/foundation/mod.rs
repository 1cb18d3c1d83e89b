//! Core validation types and traits
//!
//! This module contains the building blocks every validator is made of:
//!
//! - **Codes**: [`ErrorCode`], the closed set of failure classes
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`Violation`], [`ValidationError`]
//! - **Templates**: [`MessageTemplates`], one immutable table per validator type
//! - **Outcome**: [`Validator`], [`Messages`]
//! - **Pipelines**: [`Stage`], [`run_stages`]
//!
//! # Architecture
//!
//! A rule ([`Validate`] implementation) is stateless: `check` looks at a
//! [`Value`] and reports at most one [`Violation`]. Rendering turns the
//! violation into text using the rule type's template table. Only
//! [`Validator`] keeps state, and only the outcome of the latest check.
//!
//! ```
//! use reportingcloud_validator::foundation::{ErrorCode, Validate, Validator};
//! use reportingcloud_validator::validators::DateTime;
//! use serde_json::json;
//!
//! // Stateless
//! let error = DateTime.validate(&json!("2016-06-02T15:49:57+02:00")).unwrap_err();
//! assert_eq!(error.code, ErrorCode::InvalidOffset);
//!
//! // Stateful
//! let mut validator = Validator::new(DateTime);
//! assert!(validator.is_valid("2016-06-02T15:49:57+00:00"));
//! ```

pub mod code;
pub mod error;
pub mod pipeline;
pub mod template;
pub mod traits;
pub mod validator;

/// Dynamic candidate value accepted by every validator.
pub use serde_json::Value;

pub use code::{ErrorCode, UnknownErrorCode};
pub use error::{Params, ValidationError, Violation};
pub use pipeline::{Stage, StageFn, run_stages};
pub use template::{MessageTemplates, VALUE_PLACEHOLDER};
pub use traits::{Validate, ValidateExt};
pub use validator::{Messages, Validator};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the rendered [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;
