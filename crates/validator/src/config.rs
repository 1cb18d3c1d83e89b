//! Construction options of the configurable validators.
//!
//! Every validator except [`Between`](crate::validators::Between) is fixed by
//! the service contract (see [`consts`](crate::consts)). `Between` takes its
//! bounds from [`BetweenOptions`], which can be built in code or deserialized
//! from an options document:
//!
//! ```
//! use reportingcloud_validator::config::BetweenOptions;
//! use serde_json::json;
//!
//! let options = BetweenOptions::from_value(json!({ "min": 1, "max": 10 })).unwrap();
//! assert!(options.inclusive);
//! ```

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::foundation::Value;

/// Bounds of a [`Between`](crate::validators::Between) check.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BetweenOptions {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Whether the bounds themselves are accepted. Defaults to `true`.
    #[serde(default = "default_inclusive")]
    pub inclusive: bool,
}

const fn default_inclusive() -> bool {
    true
}

impl BetweenOptions {
    /// Inclusive options for `[min, max]`.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            inclusive: true,
        }
    }

    /// Sets whether the bounds are accepted.
    #[must_use = "builder methods must be chained or built"]
    pub const fn inclusive(mut self, inclusive: bool) -> Self {
        self.inclusive = inclusive;
        self
    }

    /// Deserializes options from a document such as
    /// `{"min": 1, "max": 400, "inclusive": true}`.
    pub fn from_value(options: Value) -> Result<Self> {
        Ok(serde_json::from_value(options)?)
    }

    /// Rejects non-finite or inverted bounds.
    pub fn check_bounds(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::invalid_options("bounds must be finite numbers"));
        }
        if self.min > self.max {
            return Err(Error::invalid_options(format!(
                "min ({}) is greater than max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}
