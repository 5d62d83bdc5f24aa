//! `[url]` section.

use crate::utils::path::UrlStyle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UrlConfig {
    /// Output shape used by `prep` when `--style` is not given.
    pub style: UrlStyle,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_pretty() {
        let config = test_parse_config("");
        assert_eq!(config.url.style, UrlStyle::Pretty);
    }

    #[test]
    fn test_style_parsing() {
        for (input, expected) in [("pretty", UrlStyle::Pretty), ("ugly", UrlStyle::Ugly)] {
            let config = test_parse_config(&format!("[url]\nstyle = \"{input}\""));
            assert_eq!(config.url.style, expected, "style failed for {input}");
        }
    }

    #[test]
    fn test_style_invalid() {
        let result: Result<UrlConfig, _> = toml::from_str("style = \"fancy\"");
        assert!(result.is_err());
    }
}
