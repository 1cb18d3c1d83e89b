//! Stateful validator wrapper.
//!
//! [`Validator`] pairs a rule with the outcome of its most recent check: the
//! value that was checked and the rendered messages keyed by error code.

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::Value;
use super::code::ErrorCode;
use super::error::ValidationError;
use super::traits::Validate;
use crate::error::Result;

/// Rendered messages of one check, keyed by error code.
///
/// Empty after a successful check. After a failed check it holds exactly one
/// entry.
pub type Messages = IndexMap<ErrorCode, String>;

/// A rule plus the outcome of its last check.
///
/// Every call to [`is_valid`](Self::is_valid) overwrites the previous
/// outcome. Checking needs `&mut self`, so one instance cannot be shared by
/// concurrent callers without a lock; construct one per call instead, it is
/// cheap.
///
/// # Examples
///
/// ```
/// use reportingcloud_validator::foundation::{ErrorCode, Validator};
/// use reportingcloud_validator::validators::ZoomFactor;
///
/// let mut validator = Validator::new(ZoomFactor);
///
/// assert!(!validator.is_valid(401));
/// assert!(validator.messages().contains_key(&ErrorCode::NotBetween));
///
/// assert!(validator.is_valid(100));
/// assert!(validator.messages().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator<V> {
    rule: V,
    value: Option<Value>,
    messages: Messages,
}

impl<V: Validate> Validator<V> {
    /// Wraps `rule` with an empty outcome.
    #[must_use]
    pub fn new(rule: V) -> Self {
        Self {
            rule,
            value: None,
            messages: Messages::new(),
        }
    }

    /// Checks `value`, replacing the previous outcome.
    ///
    /// Never panics on malformed input; the reason for a `false` result is
    /// available from [`messages`](Self::messages).
    pub fn is_valid(&mut self, value: impl Into<Value>) -> bool {
        self.record(value.into()).is_ok()
    }

    /// Checks `value` and turns a failure into [`Error::InvalidArgument`].
    ///
    /// This is the hand-off to code that is about to build a request: a
    /// failed check becomes one local error and no request is sent.
    ///
    /// [`Error::InvalidArgument`]: crate::Error::InvalidArgument
    pub fn ensure(&mut self, value: impl Into<Value>) -> Result<()> {
        self.record(value.into()).map_err(Into::into)
    }

    /// Messages of the most recent check.
    #[must_use]
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// The value passed to the most recent check.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// The wrapped rule.
    #[must_use]
    pub fn rule(&self) -> &V {
        &self.rule
    }

    /// Drops the outcome and returns the rule.
    pub fn into_inner(self) -> V {
        self.rule
    }

    fn record(&mut self, value: Value) -> Result<(), ValidationError> {
        self.messages.clear();
        let outcome = self.rule.validate(&value);

        match &outcome {
            Ok(()) => trace!(validator = V::NAME, "value accepted"),
            Err(error) => {
                debug!(validator = V::NAME, code = %error.code, "value rejected");
                self.messages.insert(error.code, error.message.clone());
            }
        }

        self.value = Some(value);
        outcome
    }
}

impl<V: Validate> From<V> for Validator<V> {
    fn from(rule: V) -> Self {
        Self::new(rule)
    }
}
