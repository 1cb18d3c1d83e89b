//! Integration tests for reportingcloud-validator.
//!
//! Fixture tables mirror the values the client sees in practice; property
//! tests cover the numeric and textual input space around them.

mod date_time;
mod extension;
mod image_formats;
mod outcome;
mod properties;
