//! `[log]` section.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Show debug output. `--verbose` turns it on regardless.
    pub verbose: bool,
}
