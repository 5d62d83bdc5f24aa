//! Filesystem probes and writers.
//!
//! Thin wrappers over `std::fs`. OS errors are passed through unchanged in
//! [`FsError::Io`]; only the two conditions callers branch on get their own
//! variants.

use super::lexical::{clean, join};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors from filesystem helpers.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("{0:?} path does not exist")]
    NotFound(PathBuf),

    #[error("{0:?} already exists")]
    AlreadyExists(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, FsError>;

/// Check whether a file or directory exists.
///
/// Not-found is `Ok(false)`; any other stat error (e.g. permissions) is
/// returned.
pub fn exists(path: impl AsRef<Path>) -> Result<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err.into()),
    }
}

/// Check whether `path` exists and is a directory.
pub fn dir_exists(path: impl AsRef<Path>) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err.into()),
    }
}

/// Check whether `path` is a directory. Unlike [`dir_exists`], a missing
/// path is an error.
pub fn is_dir(path: impl AsRef<Path>) -> Result<bool> {
    Ok(fs::metadata(path)?.is_dir())
}

/// Check whether a directory has no entries, or a file has zero length.
pub fn is_empty(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    if !exists(path)? {
        return Err(FsError::NotFound(path.to_path_buf()));
    }

    let meta = fs::metadata(path)?;
    if meta.is_dir() {
        Ok(fs::read_dir(path)?.next().is_none())
    } else {
        Ok(meta.len() == 0)
    }
}

/// Resolve `path` against `working_dir` and clean the result.
///
/// Purely lexical: symlinks are not followed and nothing is checked on disk.
///
/// # Examples
/// ```
/// use pathprep::utils::path::fs::abs_pathify;
/// assert_eq!(abs_pathify("/a/../b", "/site"), "/b");
/// assert_eq!(abs_pathify("content/post.md", "/site"), "/site/content/post.md");
/// ```
pub fn abs_pathify(path: &str, working_dir: &str) -> String {
    if is_absolute(path) {
        clean(path)
    } else {
        clean(&join(&[working_dir, path]))
    }
}

#[cfg(not(windows))]
#[inline]
fn is_absolute(path: &str) -> bool {
    path.starts_with('/')
}

#[cfg(windows)]
#[inline]
fn is_absolute(path: &str) -> bool {
    path.starts_with('/') || Path::new(path).is_absolute()
}

/// Directory of the running executable.
///
/// Follows the executable's symlink when it can be resolved, so an installed
/// link points back to the real install directory.
pub fn find_cwd() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let real = fs::canonicalize(&exe).unwrap_or_else(|_| exe.clone());

    Ok(real
        .parent()
        .or_else(|| exe.parent())
        .map(Path::to_path_buf)
        .unwrap_or_default())
}

/// Write `reader` to `path`, creating parent directories and replacing any
/// existing file.
pub fn write_to_disk(path: impl AsRef<Path>, reader: &mut impl io::Read) -> Result<()> {
    let path = path.as_ref();
    create_parent(path)?;

    let mut file = fs::File::create(path)?;
    io::copy(reader, &mut file)?;
    Ok(())
}

/// Like [`write_to_disk`], but refuses to overwrite an existing file.
pub fn safe_write_to_disk(path: impl AsRef<Path>, reader: &mut impl io::Read) -> Result<()> {
    let path = path.as_ref();
    create_parent(path)?;

    let mut file = match fs::OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            return Err(FsError::AlreadyExists(path.to_path_buf()));
        }
        Err(err) => return Err(err.into()),
    };
    io::copy(reader, &mut file)?;
    Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exists() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        assert!(!exists(&file).unwrap());

        fs::write(&file, "x").unwrap();
        assert!(exists(&file).unwrap());
        assert!(exists(dir.path()).unwrap());
    }

    #[test]
    fn test_dir_exists() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "x").unwrap();

        assert!(dir_exists(dir.path()).unwrap());
        assert!(!dir_exists(&file).unwrap());
        assert!(!dir_exists(dir.path().join("missing")).unwrap());
    }

    #[test]
    fn test_is_dir() {
        let dir = TempDir::new().unwrap();
        assert!(is_dir(dir.path()).unwrap());

        let missing = is_dir(dir.path().join("missing"));
        assert!(matches!(missing, Err(FsError::Io(err)) if err.kind() == io::ErrorKind::NotFound));
    }

    #[test]
    fn test_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(is_empty(dir.path()).unwrap());

        let file = dir.path().join("a.txt");
        fs::write(&file, "").unwrap();
        assert!(is_empty(&file).unwrap());
        assert!(!is_empty(dir.path()).unwrap());

        fs::write(&file, "content").unwrap();
        assert!(!is_empty(&file).unwrap());
    }

    #[test]
    fn test_is_empty_missing() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let err = is_empty(&missing).unwrap_err();
        assert!(matches!(err, FsError::NotFound(ref p) if *p == missing));
        assert!(err.to_string().ends_with("path does not exist"));
    }

    #[test]
    fn test_abs_pathify() {
        assert_eq!(abs_pathify("/a/b/../c", "/work"), "/a/c");
        assert_eq!(abs_pathify("post.md", "/work"), "/work/post.md");
        assert_eq!(abs_pathify("../post.md", "/work/site"), "/work/post.md");
        assert_eq!(abs_pathify("./x//y/", "/work"), "/work/x/y");
        assert_eq!(abs_pathify("", "/work"), "/work");
        assert_eq!(abs_pathify("post.md", ""), "post.md");
    }

    #[test]
    fn test_find_cwd() {
        let dir = find_cwd().unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_write_to_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/out.html");

        write_to_disk(&path, &mut "first".as_bytes()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");

        write_to_disk(&path, &mut "second".as_bytes()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_safe_write_to_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("section/name/index.html");

        safe_write_to_disk(&path, &mut "first".as_bytes()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");

        let err = safe_write_to_disk(&path, &mut "second".as_bytes()).unwrap_err();
        assert!(matches!(err, FsError::AlreadyExists(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
    }
}
