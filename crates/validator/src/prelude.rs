//! Prelude module for convenient imports.
//!
//! `use reportingcloud_validator::prelude::*;` brings in the traits, the
//! stateful [`Validator`], error types and every built-in validator.
//!
//! # Examples
//!
//! ```
//! use reportingcloud_validator::prelude::*;
//!
//! let mut zoom = zoom_factor().into_validator();
//! assert!(!zoom.is_valid(0));
//! assert!(zoom.messages().contains_key(&ErrorCode::NotBetween));
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, outcome
// ============================================================================

pub use crate::foundation::{
    ErrorCode, Messages, Validate, ValidateExt, ValidationError, Validator, Value, Violation,
};

pub use crate::config::BetweenOptions;
pub use crate::error::{Error, Result};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::*;
