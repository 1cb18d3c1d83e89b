//! Strict integer-kind check.

use crate::foundation::Value;

crate::validator! {
    /// Accepts integer numbers only.
    ///
    /// Booleans, floats (including `1.0`), numeric strings and null are all
    /// rejected: integer parameters of the API must reach the service exactly
    /// as the caller wrote them.
    ///
    /// # Examples
    ///
    /// ```
    /// use reportingcloud_validator::foundation::Validate;
    /// use reportingcloud_validator::validators::TypeInteger;
    ///
    /// assert!(TypeInteger.validate_any(42).is_ok());
    /// assert!(TypeInteger.validate_any(42.0).is_err());
    /// assert!(TypeInteger.validate_any("42").is_err());
    /// assert!(TypeInteger.validate_any(true).is_err());
    /// ```
    pub TypeInteger;
    templates { InvalidType => "'%value%' must be an integer" }
    rule(value) { is_integer(value) }
    error InvalidType;
    fn type_integer();
}

/// Returns true for JSON numbers that hold an integer.
#[must_use]
pub fn is_integer(value: &Value) -> bool {
    value.is_i64() || value.is_u64()
}
