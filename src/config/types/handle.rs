//! Global config handle.
//!
//! The config is loaded once at startup and published here. Reads are
//! lock-free through `arc-swap`. Path functions never read it; callers pass
//! the values they need.

use crate::config::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::path::UrlStyle;

    #[test]
    fn test_init_and_read() {
        let mut config = SiteConfig::default();
        config.url.style = UrlStyle::Ugly;

        let stored = init_config(config);
        assert_eq!(stored.url.style, UrlStyle::Ugly);
        assert!(Arc::ptr_eq(&stored, &cfg()));
    }
}
