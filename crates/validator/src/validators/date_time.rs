//! Backend timestamp validator

use std::sync::LazyLock;

use chrono::{DateTime as ChronoDateTime, FixedOffset};
use regex::Regex;

use crate::consts::{DATE_TIME_FORMAT, DATE_TIME_LENGTH, UTC_OFFSET_SECONDS};
use crate::foundation::{ErrorCode, MessageTemplates, Stage, Validate, Value, Violation, run_stages};

// Character classes only; calendar validity is left to chrono. Seconds stop
// at 59 since chrono reads `:60` as a leap second at any time of day.
static DATE_TIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[0-9]{4}-(0[1-9]|1[0-2])-[0-9]{2}",
        r"T([01][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9]",
        r"[+-][0-9]{2}:[0-9]{2}$",
    ))
    .unwrap()
});

// ============================================================================
// DATE TIME
// ============================================================================

/// Validates a timestamp in the backend's format, `2016-06-02T15:49:57+00:00`.
///
/// Four checks run in order and the first failure wins:
///
/// | Stage  | Requirement                                  | Code            |
/// |--------|----------------------------------------------|-----------------|
/// | type   | a string                                     | `invalidType`   |
/// | length | exactly 25 characters                        | `invalidLength` |
/// | syntax | `YYYY-MM-DDTHH:MM:SS±HH:MM`, a real instant  | `invalidSyntax` |
/// | offset | UTC (`+00:00`)                               | `invalidOffset` |
///
/// # Examples
///
/// ```
/// use reportingcloud_validator::foundation::{ErrorCode, Validate};
/// use reportingcloud_validator::validators::DateTime;
///
/// assert!(DateTime.validate_any("2016-06-02T15:49:57+00:00").is_ok());
///
/// let error = DateTime.validate_any("2016-06-02T15:49:57+02:00").unwrap_err();
/// assert_eq!(error.code, ErrorCode::InvalidOffset);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateTime;

impl DateTime {
    const STAGES: &'static [Stage<Self>] = &[
        Stage::new("type", Self::check_type),
        Stage::new("length", Self::check_length),
        Stage::new("syntax", Self::check_syntax),
        Stage::new("offset", Self::check_offset),
    ];

    fn check_type(&self, value: &Value) -> Result<(), Violation> {
        if value.is_string() {
            Ok(())
        } else {
            Err(Violation::new(ErrorCode::InvalidType))
        }
    }

    fn check_length(&self, value: &Value) -> Result<(), Violation> {
        if text(value).chars().count() == DATE_TIME_LENGTH {
            Ok(())
        } else {
            Err(Violation::new(ErrorCode::InvalidLength).with_param("length", DATE_TIME_LENGTH))
        }
    }

    fn check_syntax(&self, value: &Value) -> Result<(), Violation> {
        let s = text(value);
        if DATE_TIME_REGEX.is_match(s) && parse(s).is_some() {
            Ok(())
        } else {
            Err(Violation::new(ErrorCode::InvalidSyntax))
        }
    }

    fn check_offset(&self, value: &Value) -> Result<(), Violation> {
        match parse(text(value)) {
            Some(instant) if instant.offset().local_minus_utc() == UTC_OFFSET_SECONDS => Ok(()),
            _ => Err(Violation::new(ErrorCode::InvalidOffset)),
        }
    }
}

/// String content of a value that already passed the type stage.
fn text(value: &Value) -> &str {
    value.as_str().unwrap_or_default()
}

fn parse(s: &str) -> Option<ChronoDateTime<FixedOffset>> {
    ChronoDateTime::<FixedOffset>::parse_from_str(s, DATE_TIME_FORMAT).ok()
}

impl Validate for DateTime {
    const NAME: &'static str = "DateTime";
    const TEMPLATES: MessageTemplates = &[
        (ErrorCode::InvalidType, "'%value%' must be a string"),
        (
            ErrorCode::InvalidLength,
            "'%value%' must be exactly %length% characters long",
        ),
        (
            ErrorCode::InvalidSyntax,
            "'%value%' is not a valid date time (expected YYYY-MM-DDTHH:MM:SS+00:00)",
        ),
        (
            ErrorCode::InvalidOffset,
            "'%value%' must have a UTC offset of +00:00",
        ),
    ];

    fn check(&self, value: &Value) -> Result<(), Violation> {
        run_stages(self, Self::STAGES, value)
    }
}

/// Creates a [`DateTime`] validator.
#[must_use]
pub const fn date_time() -> DateTime {
    DateTime
}

// ============================================================================
// TESTS
// ============================================================================
