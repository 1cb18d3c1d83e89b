//! Message templates.
//!
//! Each validator type owns one immutable table mapping its error codes to a
//! message pattern. Patterns use `%name%` placeholders; `%value%` is always
//! the checked value, anything else comes from the violation's parameters.

use std::borrow::Cow;

use super::Value;
use super::code::ErrorCode;
use super::error::Violation;

/// Per-type table of `(code, pattern)` pairs.
pub type MessageTemplates = &'static [(ErrorCode, &'static str)];

/// Placeholder replaced by the checked value.
pub const VALUE_PLACEHOLDER: &str = "%value%";

/// Returns the pattern registered for `code`, if any.
#[must_use]
pub fn lookup(templates: MessageTemplates, code: ErrorCode) -> Option<&'static str> {
    templates
        .iter()
        .find(|(registered, _)| *registered == code)
        .map(|(_, pattern)| *pattern)
}

/// Renders a violation of `value` into its message.
///
/// Parameters are substituted before the value so that a value which happens
/// to contain `%min%` is reproduced verbatim. A code without a template
/// renders as `"<code>: '<value>'"`.
#[must_use]
pub fn render(templates: MessageTemplates, violation: &Violation, value: &Value) -> String {
    let shown = display_value(value);

    let Some(pattern) = lookup(templates, violation.code) else {
        return format!("{}: '{shown}'", violation.code);
    };

    let mut message = pattern.to_owned();
    for (key, param) in &violation.params {
        message = message.replace(&format!("%{key}%"), param);
    }
    message.replace(VALUE_PLACEHOLDER, &shown)
}

/// How a value appears inside a message: strings bare, everything else as
/// JSON text.
#[must_use]
pub fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}
