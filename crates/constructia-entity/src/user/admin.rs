//! Admin user entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::role::AdminRole;
use super::status::AccountStatus;

/// An admin principal.
///
/// Admin accounts are compiled into the platform; there is no backing
/// table, so this struct is never read from the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    /// Unique admin identifier.
    pub id: String,
    /// Login username.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Admin role.
    pub role: AdminRole,
    /// Granted permission names. `"all"` grants everything.
    pub permissions: Vec<String>,
    /// Display name.
    pub name: String,
    /// Account status.
    pub status: AccountStatus,
    /// Last successful login time.
    pub last_login: Option<DateTime<Utc>>,
}

impl AdminUser {
    /// Check whether this admin holds the given permission.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == "all" || p == permission)
    }
}
