//! Local persisted state configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the persisted local key/value state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// State provider: `"file"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Path to the state file for the `"file"` provider.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            path: default_path(),
        }
    }
}

fn default_provider() -> String {
    "file".to_string()
}

fn default_path() -> String {
    "data/state/constructia.json".to_string()
}
