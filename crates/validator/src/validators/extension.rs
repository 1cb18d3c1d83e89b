//! File extension validators
//!
//! Paths are treated as plain strings: both `/` and `\` separate segments
//! whatever the host platform, so a Windows path checked on Linux gives the
//! same answer.

use crate::consts::{DOCUMENT_EXTENSIONS, TEMPLATE_EXTENSIONS};
use crate::foundation::Value;

use super::membership::contains_ignore_case;

/// Returns the extension of the last segment of `path`, without the dot.
///
/// `None` when the last segment has no dot or nothing follows the last dot.
///
/// ```
/// use reportingcloud_validator::validators::extension_of;
///
/// assert_eq!(extension_of(r"c:\path\to\template.TX"), Some("TX"));
/// assert_eq!(extension_of("../archive.tar.gz"), Some("gz"));
/// assert_eq!(extension_of(".tx"), Some("tx"));
/// assert_eq!(extension_of("template."), None);
/// assert_eq!(extension_of("template/"), None);
/// ```
#[must_use]
pub fn extension_of(path: &str) -> Option<&str> {
    let file_name = path.rfind(['/', '\\']).map_or(path, |at| &path[at + 1..]);
    let (_, extension) = file_name.rsplit_once('.')?;
    (!extension.is_empty()).then_some(extension)
}

fn has_extension(value: &Value, allowed: &[&str]) -> bool {
    value
        .as_str()
        .and_then(extension_of)
        .is_some_and(|extension| contains_ignore_case(allowed, extension))
}

crate::validator! {
    /// Accepts paths of documents the service can read or produce.
    ///
    /// See [`DOCUMENT_EXTENSIONS`](crate::consts::DOCUMENT_EXTENSIONS) for
    /// the allow-list; comparison ignores case.
    ///
    /// ```
    /// use reportingcloud_validator::foundation::Validate;
    /// use reportingcloud_validator::validators::DocumentExtension;
    ///
    /// assert!(DocumentExtension.validate_any("/path/to/report.PDF").is_ok());
    /// assert!(DocumentExtension.validate_any("/path/to/report.xls").is_err());
    /// ```
    pub DocumentExtension;
    templates { UnsupportedExtension => "'%value%' contains an unsupported file extension" }
    rule(value) { has_extension(value, DOCUMENT_EXTENSIONS) }
    error UnsupportedExtension;
    fn document_extension();
}

crate::validator! {
    /// Accepts paths of templates stored by the service (`.tx`).
    pub TemplateExtension;
    templates { UnsupportedExtension => "'%value%' contains an unsupported file extension" }
    rule(value) { has_extension(value, TEMPLATE_EXTENSIONS) }
    error UnsupportedExtension;
    fn template_extension();
}
