//! `[paths]` section.

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    /// Base directory for resolving relative paths.
    ///
    /// Relative values are taken relative to the config file. Defaults to the
    /// directory holding the config file, or the current directory when no
    /// config file exists.
    pub working_dir: Option<PathBuf>,
}

impl PathsConfig {
    /// Anchor a relative `working_dir` at `root`, or default it to `root`.
    pub fn normalize(&mut self, root: &Path) {
        self.working_dir = Some(match self.working_dir.take() {
            Some(dir) if dir.is_relative() => root.join(dir),
            Some(dir) => dir,
            None => root.to_path_buf(),
        });
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(dir) = &self.working_dir
            && dir.to_str().is_none()
        {
            diag.error("paths.working_dir", "must be valid UTF-8");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default() {
        let config = test_parse_config("");
        assert_eq!(config.paths.working_dir, None);
    }

    #[test]
    fn test_normalize_relative() {
        let mut paths = test_parse_config("[paths]\nworking_dir = \"site\"").paths;
        paths.normalize(Path::new("/root/project"));
        assert_eq!(paths.working_dir, Some(PathBuf::from("/root/project/site")));
    }

    #[test]
    fn test_normalize_absolute() {
        let mut paths = test_parse_config("[paths]\nworking_dir = \"/srv/www\"").paths;
        paths.normalize(Path::new("/root/project"));
        assert_eq!(paths.working_dir, Some(PathBuf::from("/srv/www")));
    }

    #[test]
    fn test_normalize_missing() {
        let mut paths = PathsConfig::default();
        paths.normalize(Path::new("/root/project"));
        assert_eq!(paths.working_dir, Some(PathBuf::from("/root/project")));
    }
}
