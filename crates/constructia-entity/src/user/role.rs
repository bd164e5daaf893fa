//! Admin role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available to admin accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    /// Regular administrator.
    Admin,
    /// Full-privilege administrator.
    Superadmin,
}

impl AdminRole {
    /// The permission set granted to this role by default.
    pub fn default_permissions(&self) -> Vec<String> {
        let perms: &[&str] = match self {
            Self::Superadmin => &["all"],
            Self::Admin => &["read", "write", "manage_clients"],
        };
        perms.iter().map(|p| p.to_string()).collect()
    }

    /// Check if this role is the superadmin role.
    pub fn is_superadmin(&self) -> bool {
        matches!(self, Self::Superadmin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Superadmin => "superadmin",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AdminRole {
    type Err = constructia_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "superadmin" => Ok(Self::Superadmin),
            _ => Err(constructia_core::AppError::validation(format!(
                "Invalid admin role: '{s}'. Expected one of: admin, superadmin"
            ))),
        }
    }
}
