//! Output path shapes for content pages.
//!
//! Two shapes are supported:
//!
//! ```text
//! Pretty                              Ugly
//! /section/name.html   → /section/name/index.html   /section/name.html
//! /section/name/       → /section/name/index.html   /section/name.html
//! /section/name/index.html → (unchanged)            /section/name.html
//! ```
//!
//! [`prettify_path`] is a fixed point on its own output. [`uglify`] is not:
//! a path ending in `index` with no extension, or in a `.` segment, takes
//! two passes to settle (`/a/index` → `/a/index.html` → `/a.html`).

use super::lexical::{clean, dir, join};
use super::split::{dotted_ext, file_and_ext};
use serde::{Deserialize, Serialize};

/// Name of the top-level content directory, stripped by [`guess_section`].
pub const CONTENT_ROOT: &str = "content";

/// Output shape for content pages.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UrlStyle {
    /// One directory per page with an `index.html` inside (default).
    #[default]
    Pretty,
    /// One file per page.
    Ugly,
}

impl UrlStyle {
    /// Build from the legacy "ugly URLs" flag.
    pub const fn from_ugly(ugly: bool) -> Self {
        if ugly { Self::Ugly } else { Self::Pretty }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Ugly => "ugly",
        }
    }
}

/// Rewrite a content path into its publish path.
///
/// This is the entry point callers should use; it dispatches to
/// [`prettify_path`] or [`uglify`].
#[inline]
pub fn path_prep(style: UrlStyle, path: &str) -> String {
    match style {
        UrlStyle::Pretty => prettify_path(path),
        UrlStyle::Ugly => uglify(path),
    }
}

/// Pretty shape: a directory holding `index.<ext>`.
///
/// # Examples
/// ```
/// use pathprep::utils::path::route::prettify_path;
/// assert_eq!(prettify_path("/section/name.html"), "/section/name/index.html");
/// assert_eq!(prettify_path("/section/name/"), "/section/name/index.html");
/// assert_eq!(prettify_path("/section/name/index.html"), "/section/name/index.html");
/// ```
pub fn prettify_path(path: &str) -> String {
    if dotted_ext(path).is_empty() {
        if is_root_like(path) {
            return "/".to_owned();
        }
        return join(&[clean(path).as_str(), "index.html"]);
    }

    let split = file_and_ext(path);
    if split.name == "index" {
        clean(path)
    } else {
        let index = format!("index.{}", split.ext);
        join(&[dir(path), split.name, index])
    }
}

/// Ugly shape: a single file named after the page.
///
/// # Examples
/// ```
/// use pathprep::utils::path::route::uglify;
/// assert_eq!(uglify("/section/name/index.html"), "/section/name.html");
/// assert_eq!(uglify("/section/name/"), "/section/name.html");
/// assert_eq!(uglify("/section/name.html"), "/section/name.html");
/// ```
pub fn uglify(path: &str) -> String {
    if dotted_ext(path).is_empty() {
        if is_root_like(path) {
            return "/".to_owned();
        }
        return format!("{}.html", clean(path));
    }

    let split = file_and_ext(path);
    if split.name == "index" {
        let parent = dir(path);
        // The site index has no parent name to fold into
        if parent.chars().count() > 1 {
            format!("{parent}.{}", split.ext)
        } else {
            path.to_owned()
        }
    } else {
        clean(path)
    }
}

/// Guess the content section from the directory part of `path`.
///
/// A leading [`CONTENT_ROOT`] segment is dropped; only the first segment is
/// checked.
///
/// # Examples
/// ```
/// use pathprep::utils::path::route::guess_section;
/// assert_eq!(guess_section("content/blog/post.md"), "blog");
/// assert_eq!(guess_section("post.md"), "");
/// ```
pub fn guess_section(path: &str) -> String {
    let mut segments: Vec<&str> = path.split('/').collect();
    segments.pop();

    match segments.split_first() {
        None => String::new(),
        Some((&CONTENT_ROOT, rest)) => join(rest),
        Some(_) => join(&segments),
    }
}

/// Paths too short to name anything map to the site root.
///
/// Counts characters, not bytes, so a lone multi-byte character such as `é`
/// is root-like too.
#[inline]
fn is_root_like(path: &str) -> bool {
    path.chars().count() < 2
}
