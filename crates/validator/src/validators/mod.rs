//! Built-in validators
//!
//! Every validator of the ReportingCloud client lives here. Each one is a
//! stateless rule implementing [`Validate`](crate::foundation::Validate);
//! wrap it in a [`Validator`](crate::foundation::Validator) to keep the
//! outcome of the latest check.
//!
//! # Categories
//!
//! - **Numeric**: [`TypeInteger`], [`Between`], [`ZoomFactor`]
//! - **Temporal**: [`DateTime`]
//! - **Paths**: [`DocumentExtension`], [`TemplateExtension`]
//! - **Formats**: [`ImageFormats`]
//!
//! # Examples
//!
//! ```
//! use reportingcloud_validator::prelude::*;
//!
//! assert!(zoom_factor().validate_any(150).is_ok());
//! assert!(template_extension().validate_any("invoice.tx").is_ok());
//! assert!(image_formats().validate_any("tiff").is_err());
//! ```

mod membership;

// Numeric validators
pub mod between;
pub mod type_integer;
pub mod zoom_factor;

// Temporal validators
pub mod date_time;

// Path and format validators
pub mod extension;
pub mod image_formats;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use between::{Between, between};
pub use type_integer::{TypeInteger, is_integer, type_integer};
pub use zoom_factor::{ZoomFactor, zoom_factor};

pub use date_time::{DateTime, date_time};

pub use extension::{
    DocumentExtension, TemplateExtension, document_extension, extension_of, template_extension,
};
pub use image_formats::{ImageFormats, image_formats};
