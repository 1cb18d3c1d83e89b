//! # reportingcloud-validator
//!
//! Parameter validation for the ReportingCloud client. Every argument that
//! reaches the document-generation service (zoom factors, timestamps, file
//! names, image formats) is checked here first, so a bad value fails locally
//! with a readable message instead of turning into a rejected HTTP request.
//!
//! ## Quick Start
//!
//! ```
//! use reportingcloud_validator::prelude::*;
//!
//! let mut validator = Validator::new(DateTime);
//!
//! assert!(validator.is_valid("2016-06-02T15:49:57+00:00"));
//! assert!(validator.messages().is_empty());
//!
//! assert!(!validator.is_valid("2016-06-02T15:49:57+02:00"));
//! assert_eq!(
//!     validator.messages()[&ErrorCode::InvalidOffset],
//!     "'2016-06-02T15:49:57+02:00' must have a UTC offset of +00:00"
//! );
//! ```
//!
//! ## Handing failures to the caller
//!
//! [`Validator::ensure`](foundation::Validator::ensure) turns a failed check
//! into the crate [`Error`], ready to be returned with `?`:
//!
//! ```
//! use reportingcloud_validator::prelude::*;
//!
//! fn thumbnails(zoom: i64, format: &str) -> Result<()> {
//!     zoom_factor().into_validator().ensure(zoom)?;
//!     image_formats().into_validator().ensure(format)?;
//!     Ok(())
//! }
//!
//! assert!(thumbnails(100, "png").is_ok());
//! assert_eq!(thumbnails(100, "doc").unwrap_err().code(), Some(ErrorCode::NotInArray));
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for single-rule validators, or implement
//! [`Validate`](foundation::Validate) manually and run a
//! [`Stage`](foundation::Stage) pipeline for multi-step checks.
//!
//! ## Built-in Validators
//!
//! - **Numeric**: [`TypeInteger`](validators::TypeInteger),
//!   [`Between`](validators::Between), [`ZoomFactor`](validators::ZoomFactor)
//! - **Temporal**: [`DateTime`](validators::DateTime)
//! - **Paths**: [`DocumentExtension`](validators::DocumentExtension),
//!   [`TemplateExtension`](validators::TemplateExtension)
//! - **Formats**: [`ImageFormats`](validators::ImageFormats)

pub mod config;
pub mod consts;
pub mod error;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

pub use error::{Error, Result};
