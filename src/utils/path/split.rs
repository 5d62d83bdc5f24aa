//! File name / extension splitting.
//!
//! # Edge cases
//!
//! There is no file name, and both parts are empty, when the path:
//! - ends with `/`
//! - has an empty final segment
//! - has `.` or `..` as final segment
//! - has the OS path-list separator (`:` on Unix, `;` on Windows) as final
//!   segment
//!
//! The list-separator case is kept for compatibility with existing output
//! trees even though it looks like it was meant to be another `..` check.

use super::lexical::last_segment;
use serde::Serialize;

/// OS path-list separator, as used in `PATH`.
#[cfg(windows)]
pub const LIST_SEPARATOR: &str = ";";
#[cfg(not(windows))]
pub const LIST_SEPARATOR: &str = ":";

/// A path split into file name and extension.
///
/// `ext` never carries the leading dot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileAndExt {
    pub name: String,
    pub ext: String,
}

impl FileAndExt {
    fn new(name: &str, ext: &str) -> Self {
        Self {
            name: name.to_owned(),
            ext: ext.to_owned(),
        }
    }

    /// True when the path has no representable file name.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.ext.is_empty()
    }
}

/// Extension of the final segment, including the dot. Empty if none.
///
/// `"a/b.tar.gz"` gives `".gz"`, `"a.b/c"` gives `""`.
#[inline]
pub(crate) fn dotted_ext(path: &str) -> &str {
    let base = last_segment(path);
    base.rfind('.').map_or("", |pos| &base[pos..])
}

/// Split `path` into file name and extension.
///
/// # Examples
/// ```
/// use pathprep::utils::path::split::file_and_ext;
/// let split = file_and_ext("/a/b/c.html");
/// assert_eq!((split.name.as_str(), split.ext.as_str()), ("c", "html"));
/// assert!(file_and_ext("/a/b/").is_empty());
/// ```
pub fn file_and_ext(path: &str) -> FileAndExt {
    let ext = dotted_ext(path);
    let base = last_segment(path);

    let no_file_name = path.ends_with('/')
        || base.is_empty()
        || base == "."
        || base == ".."
        || base == LIST_SEPARATOR;

    if no_file_name {
        return FileAndExt::default();
    }

    match base.rfind('.') {
        Some(pos) if !ext.is_empty() => FileAndExt::new(&base[..pos], &ext[1..]),
        _ => FileAndExt::new(base, ""),
    }
}

/// File name of `path` without extension.
#[inline]
pub fn filename(path: &str) -> String {
    file_and_ext(path).name
}

/// Swap the extension of `path` for `new_ext`.
///
/// Only the file name is kept: `"a/b.md"` becomes `"b.html"`, not
/// `"a/b.html"`. Paths without a file name give `".{new_ext}"`.
pub fn replace_extension(path: &str, new_ext: &str) -> String {
    format!("{}.{new_ext}", filename(path))
}
