//! Slug sanitization.
//!
//! Turns arbitrary titles into path-legal tokens. Only Unicode letters,
//! decimal digits and `.` `/` `_` `-` survive.
//!
//! # Examples
//! ```
//! use pathprep::utils::path::slug::{make_path, make_path_to_lower, make_title};
//! assert_eq!(make_path(" Social Media "), "Social-Media");
//! assert_eq!(make_path_to_lower(" Social Media "), "social-media");
//! assert_eq!(make_title("Social-Media"), "Social Media");
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Everything outside the slug character class.
static FORBIDDEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{Nd}./_-]").unwrap());

/// Sanitize `s` into a path, preserving the original casing.
///
/// Spaces are replaced before filtering, so a run of spaces becomes a run of
/// dashes rather than a single one.
pub fn make_path(s: &str) -> String {
    unicode_sanitize(&s.trim().replace(' ', "-"))
}

/// Same as [`make_path`], lower-cased.
///
/// Lower-casing maps one character at a time, so there is no final-sigma
/// rule. Some mappings expand into combining marks (`İ` gives `i` + U+0307);
/// those are filtered out again.
pub fn make_path_to_lower(s: &str) -> String {
    let lower: String = make_path(s).chars().flat_map(char::to_lowercase).collect();
    unicode_sanitize(&lower)
}

/// Best-effort inverse of [`make_path`]: dashes become spaces.
pub fn make_title(slug: &str) -> String {
    slug.trim().replace('-', " ")
}

/// Drop every character that is not a letter, digit, `.`, `/`, `_` or `-`.
#[inline]
pub fn unicode_sanitize(s: &str) -> String {
    FORBIDDEN.replace_all(s, "").into_owned()
}
