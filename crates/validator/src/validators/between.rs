//! Numeric range validator

use crate::config::BetweenOptions;
use crate::error::Result;
use crate::foundation::{ErrorCode, MessageTemplates, Validate, Value, Violation};

// ============================================================================
// BETWEEN
// ============================================================================

/// Validates that a value lies within `[min, max]`, or `(min, max)` when not
/// inclusive.
///
/// Between does not check the value's type. Numbers compare by value and
/// strings that parse as a finite number compare by their parsed value;
/// anything else is out of range. Put a [`TypeInteger`] check in front when
/// the kind matters, as [`ZoomFactor`] does.
///
/// [`TypeInteger`]: super::TypeInteger
/// [`ZoomFactor`]: super::ZoomFactor
///
/// # Examples
///
/// ```
/// use reportingcloud_validator::foundation::Validate;
/// use reportingcloud_validator::validators::Between;
///
/// let validator = Between::new(1.0, 10.0);
/// assert!(validator.validate_any(1).is_ok());
/// assert!(validator.validate_any(10).is_ok());
/// assert!(validator.validate_any(11).is_err());
///
/// let strict = Between::exclusive(1.0, 10.0);
/// assert!(strict.validate_any(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Between {
    min: f64,
    max: f64,
    inclusive: bool,
}

impl Between {
    /// Inclusive range `[min, max]`.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            inclusive: true,
        }
    }

    /// Exclusive range `(min, max)`.
    #[must_use]
    pub const fn exclusive(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            inclusive: false,
        }
    }

    /// Builds the validator from options, rejecting unusable bounds.
    pub fn from_options(options: BetweenOptions) -> Result<Self> {
        options.check_bounds()?;
        Ok(Self {
            min: options.min,
            max: options.max,
            inclusive: options.inclusive,
        })
    }

    /// Builds the validator from an options document.
    pub fn from_value(options: Value) -> Result<Self> {
        Self::from_options(BetweenOptions::from_value(options)?)
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Whether the bounds themselves are accepted.
    #[must_use]
    pub const fn is_inclusive(&self) -> bool {
        self.inclusive
    }

    /// Returns true when `n` is inside the range.
    #[must_use]
    pub fn contains(&self, n: f64) -> bool {
        if self.inclusive {
            self.min <= n && n <= self.max
        } else {
            self.min < n && n < self.max
        }
    }

    fn violation(&self) -> Violation {
        Violation::new(ErrorCode::NotBetween)
            .with_param("min", self.min)
            .with_param("max", self.max)
            .with_param(
                "bounds",
                if self.inclusive {
                    "inclusive"
                } else {
                    "exclusive"
                },
            )
    }
}

impl TryFrom<BetweenOptions> for Between {
    type Error = crate::Error;

    fn try_from(options: BetweenOptions) -> Result<Self> {
        Self::from_options(options)
    }
}

/// Numeric reading of a value for range comparison.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

impl Validate for Between {
    const NAME: &'static str = "Between";
    const TEMPLATES: MessageTemplates = &[(
        ErrorCode::NotBetween,
        "'%value%' is not between '%min%' and '%max%' (%bounds%)",
    )];

    fn check(&self, value: &Value) -> Result<(), Violation> {
        match numeric(value) {
            Some(n) if self.contains(n) => Ok(()),
            _ => Err(self.violation()),
        }
    }
}

/// Creates an inclusive [`Between`] validator.
#[must_use]
pub const fn between(min: f64, max: f64) -> Between {
    Between::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================
