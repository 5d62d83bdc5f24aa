//! Configuration management for `pathprep.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── log        # [log]
//! │   ├── paths      # [paths]
//! │   └── url        # [url]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError
//! │   └── handle     # Global config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The config file is optional. Without one every section takes its default
//! and the working directory is the current directory.

pub mod section;
pub mod types;
mod util;

pub use section::{LogConfig, PathsConfig, UrlConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, cfg, init_config};
pub use util::{find_config_file, find_config_file_from};

use crate::{cli::Cli, debug, log, utils::highlight::HighlightOptions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "pathprep.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing pathprep.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,

    /// URL shape settings
    #[serde(default)]
    pub url: UrlConfig,

    /// Highlight tool settings
    #[serde(default)]
    pub highlight: HighlightOptions,

    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. A missing file is not an
    /// error; defaults are used instead.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.config_path = Some(path);
                config
            }
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                Self::default()
            }
        };

        config.finalize(&cwd, cli);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::from)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Resolve paths and apply CLI overrides.
    fn finalize(&mut self, cwd: &Path, cli: &Cli) {
        let root = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);

        self.paths.normalize(&root);

        if cli.verbose {
            self.log.verbose = true;
        }
        crate::logger::set_verbose(self.log.verbose);
    }

    /// Validate configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.paths.validate(&mut diag);
        if self.highlight.lexer.trim().is_empty() {
            diag.error("highlight.lexer", "must not be empty");
        }
        if self.highlight.style.trim().is_empty() {
            diag.error("highlight.style", "must not be empty");
        }

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Working directory used to make paths absolute.
    pub fn working_dir(&self) -> String {
        self.paths
            .working_dir
            .as_deref()
            .map(|dir| dir.to_string_lossy().replace('\\', "/"))
            .unwrap_or_default()
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::path::UrlStyle;
    use clap::Parser;

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SiteConfig::from_str("[url\nstyle = \"ugly\"").is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert!(config.config_path.is_none());
        assert_eq!(config.url.style, UrlStyle::Pretty);
        assert_eq!(config.highlight, HighlightOptions::default());
        assert!(!config.log.verbose);
    }

    #[test]
    fn test_full_config() {
        let config = test_parse_config(
            r#"
[paths]
working_dir = "/srv/site"

[url]
style = "ugly"

[highlight]
lexer = "rust"
style = "molokai"
line_numbers = true

[log]
verbose = true
"#,
        );
        assert_eq!(config.paths.working_dir, Some(PathBuf::from("/srv/site")));
        assert_eq!(config.url.style, UrlStyle::Ugly);
        assert_eq!(config.highlight.lexer, "rust");
        assert!(config.highlight.line_numbers);
        assert!(config.log.verbose);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[url]\nstyle = \"ugly\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.url.style, UrlStyle::Ugly);
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored("[url]\nstyle = \"pretty\"").unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_validate_empty_lexer() {
        let config = test_parse_config("[highlight]\nlexer = \"\"");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("highlight.lexer"));
    }

    #[test]
    fn test_finalize_defaults_working_dir() {
        let cli = Cli::try_parse_from(["pathprep", "abs", "post.md"]).unwrap();
        let mut config = SiteConfig::default();
        config.finalize(Path::new("/tmp/site"), &cli);
        assert_eq!(config.working_dir(), "/tmp/site");
    }

    #[test]
    fn test_finalize_relative_to_config_file() {
        let cli = Cli::try_parse_from(["pathprep", "abs", "post.md"]).unwrap();
        let mut config = test_parse_config("[paths]\nworking_dir = \"public\"");
        config.config_path = Some(PathBuf::from("/srv/site/pathprep.toml"));
        config.finalize(Path::new("/tmp"), &cli);
        assert_eq!(config.working_dir(), "/srv/site/public");
    }
}
