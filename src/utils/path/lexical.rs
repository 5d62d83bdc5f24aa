//! Lexical path operations on `/`-separated strings.
//!
//! Nothing here touches the filesystem. Paths are treated as text with `/`
//! as the separator regardless of host OS.

/// Canonical lexical form of `path`.
///
/// - repeated `/` collapse to one
/// - `.` segments are dropped
/// - `..` removes the preceding segment; at the root of a rooted path it is
///   dropped, at the start of a relative path it is kept
/// - trailing `/` is removed (except for the root itself)
///
/// The empty string cleans to `.`.
///
/// # Examples
/// ```
/// use pathprep::utils::path::lexical::clean;
/// assert_eq!(clean("/a//b/./c/.."), "/a/b");
/// assert_eq!(clean("../a/../.."), "../..");
/// assert_eq!(clean(""), ".");
/// ```
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_owned();
    }

    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    // Leading `..` of a relative path can never be popped
    let mut floor = 0;

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.len() > floor {
                    segments.pop();
                } else if !rooted {
                    segments.push("..");
                    floor = segments.len();
                }
            }
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_owned(),
        (false, false) => joined,
    }
}

/// Directory part of `path`: everything before the last `/`, cleaned.
///
/// A path without any `/` yields `.`.
pub fn dir(path: &str) -> String {
    let head = path.rfind('/').map_or("", |pos| &path[..=pos]);
    clean(head)
}

/// Final segment of `path`: everything after the last `/`.
///
/// Unlike `Path::file_name`, a trailing `/` yields the empty string.
#[inline]
pub fn last_segment(path: &str) -> &str {
    path.rfind('/').map_or(path, |pos| &path[pos + 1..])
}

/// Join non-empty `parts` with `/` and clean the result.
///
/// Returns the empty string when every part is empty.
pub fn join<S: AsRef<str>>(parts: &[S]) -> String {
    let kept: Vec<&str> = parts
        .iter()
        .map(AsRef::as_ref)
        .filter(|part| !part.is_empty())
        .collect();

    if kept.is_empty() {
        String::new()
    } else {
        clean(&kept.join("/"))
    }
}
