//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session management configuration.
///
/// Expiry is lazy: a session older than `ttl_hours` is destroyed the
/// next time it is read. There is no background sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session lifetime in hours from login.
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: default_ttl_hours(),
        }
    }
}

fn default_ttl_hours() -> u64 {
    24
}
