//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// The passphrase and shared access password default to the demo
/// literals shipped with the platform. They are equality-checked
/// secrets, not a security boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared passphrase required before the admin credential form.
    #[serde(default = "default_admin_passphrase")]
    pub admin_passphrase: String,
    /// Shared access password accepted for any remote client row.
    #[serde(default = "default_shared_access_password")]
    pub shared_access_password: String,
    /// Minimum password length for new registrations.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_passphrase: default_admin_passphrase(),
            shared_access_password: default_shared_access_password(),
            password_min_length: default_password_min(),
        }
    }
}

fn default_admin_passphrase() -> String {
    "obra-segura-2024".to_string()
}

fn default_shared_access_password() -> String {
    "constructia2024".to_string()
}

fn default_password_min() -> usize {
    8
}
