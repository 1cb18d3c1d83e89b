//! Error codes reported by the validators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identifier of one validation failure class.
///
/// The string form (`invalidType`, `notBetween`, ...) is part of the contract
/// with calling code: it is what ends up as the key of
/// [`Messages`](crate::foundation::Messages) and in serialized outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    /// The value is not of the kind the validator accepts.
    InvalidType,
    /// The value has the wrong number of characters.
    InvalidLength,
    /// The value does not follow the required grammar.
    InvalidSyntax,
    /// The timestamp carries a UTC offset other than the required one.
    InvalidOffset,
    /// The value lies outside the configured range.
    NotBetween,
    /// The value is not one of the allowed tokens.
    NotInArray,
    /// The path has no extension, or one that is not allowed.
    UnsupportedExtension,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::InvalidType,
        Self::InvalidLength,
        Self::InvalidSyntax,
        Self::InvalidOffset,
        Self::NotBetween,
        Self::NotInArray,
        Self::UnsupportedExtension,
    ];

    /// Returns the wire form of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidType => "invalidType",
            Self::InvalidLength => "invalidLength",
            Self::InvalidSyntax => "invalidSyntax",
            Self::InvalidOffset => "invalidOffset",
            Self::NotBetween => "notBetween",
            Self::NotInArray => "notInArray",
            Self::UnsupportedExtension => "unsupportedExtension",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ErrorCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Returned when parsing a string that is not a known [`ErrorCode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown validation error code `{0}`")]
pub struct UnknownErrorCode(pub String);

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownErrorCode(s.to_owned()))
    }
}
