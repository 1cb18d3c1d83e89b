//! Zoom factor validator

use crate::consts::{MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR};
use crate::foundation::{ErrorCode, MessageTemplates, Stage, Validate, Value, Violation, run_stages};

use super::{Between, TypeInteger};

/// Range the rendering engine accepts, in percent.
const RANGE: Between = Between::new(MIN_ZOOM_FACTOR as f64, MAX_ZOOM_FACTOR as f64);

/// Validates a zoom factor: an integer in `[1, 400]`.
///
/// The kind is checked first. A float, a numeric string or a boolean reports
/// `invalidType` even when its numeric reading would be in range; only an
/// integer outside the range reports `notBetween`.
///
/// # Examples
///
/// ```
/// use reportingcloud_validator::foundation::{ErrorCode, Validate};
/// use reportingcloud_validator::validators::ZoomFactor;
///
/// assert!(ZoomFactor.validate_any(1).is_ok());
/// assert!(ZoomFactor.validate_any(400).is_ok());
///
/// let error = ZoomFactor.validate_any(401).unwrap_err();
/// assert_eq!(error.code, ErrorCode::NotBetween);
/// assert_eq!(error.message, "'401' contains an invalid zoom factor");
///
/// let error = ZoomFactor.validate_any("invalid").unwrap_err();
/// assert_eq!(error.code, ErrorCode::InvalidType);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ZoomFactor;

impl ZoomFactor {
    const STAGES: &'static [Stage<Self>] = &[
        Stage::new("type", Self::check_type),
        Stage::new("range", Self::check_range),
    ];

    fn check_type(&self, value: &Value) -> Result<(), Violation> {
        TypeInteger.check(value)
    }

    fn check_range(&self, value: &Value) -> Result<(), Violation> {
        RANGE.check(value)
    }
}

impl Validate for ZoomFactor {
    const NAME: &'static str = "ZoomFactor";
    const TEMPLATES: MessageTemplates = &[
        (ErrorCode::InvalidType, "'%value%' must be an integer"),
        (ErrorCode::NotBetween, "'%value%' contains an invalid zoom factor"),
    ];

    fn check(&self, value: &Value) -> Result<(), Violation> {
        run_stages(self, Self::STAGES, value)
    }
}

/// Creates a [`ZoomFactor`] validator.
#[must_use]
pub const fn zoom_factor() -> ZoomFactor {
    ZoomFactor
}
