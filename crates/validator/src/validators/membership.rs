//! Case-insensitive allow-list membership.

/// Returns true when `token` equals one of `allowed`, ignoring ASCII case.
///
/// Allow-lists are plain ASCII tokens, so ASCII folding is exact for them;
/// a token with non-ASCII characters never matches.
pub(crate) fn contains_ignore_case(allowed: &[&str], token: &str) -> bool {
    allowed
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(token))
}
