//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/content/posts/  ← cwd
/// /home/user/site/pathprep.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
///
/// An absolute `config_name` is returned as-is when it exists.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.exists())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_start_dir() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("pathprep.toml");
        fs::write(&config, "").unwrap();

        let found = find_config_file_from(dir.path(), Path::new("pathprep.toml"));
        assert_eq!(found, Some(config));
    }

    #[test]
    fn test_find_walks_upward() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("pathprep.toml");
        fs::write(&config, "").unwrap();
        let nested = dir.path().join("content/posts");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_file_from(&nested, Path::new("pathprep.toml"));
        assert_eq!(found, Some(config));
    }

    #[test]
    fn test_find_absolute() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("custom.toml");

        assert_eq!(find_config_file_from(Path::new("/"), &config), None);
        fs::write(&config, "").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &config), Some(config));
    }

    #[test]
    fn test_find_missing() {
        let dir = TempDir::new().unwrap();
        let found = find_config_file_from(dir.path(), Path::new("pathprep-missing-4f2a.toml"));
        assert_eq!(found, None);
    }
}
