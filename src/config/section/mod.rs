//! Configuration section definitions.
//!
//! Each module corresponds to a section in `pathprep.toml`:
//!
//! | Module  | TOML Section | Purpose                                |
//! |---------|--------------|----------------------------------------|
//! | `paths` | `[paths]`    | Working directory for absolute paths   |
//! | `url`   | `[url]`      | Default output shape (pretty / ugly)   |
//! | `log`   | `[log]`      | Verbose logging                        |
//!
//! `[highlight]` maps directly onto [`HighlightOptions`].
//!
//! [`HighlightOptions`]: crate::utils::highlight::HighlightOptions

mod log;
mod paths;
mod url;

pub use log::LogConfig;
pub use paths::PathsConfig;
pub use url::UrlConfig;
