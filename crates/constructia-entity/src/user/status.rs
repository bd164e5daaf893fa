//! Account status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account status for a client or admin account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Account is active.
    Active,
    /// Account is deactivated by an admin.
    Inactive,
    /// Account is suspended (e.g. unpaid subscription).
    Suspended,
}

impl AccountStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Suspended => "suspended",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = constructia_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "suspended" => Ok(Self::Suspended),
            _ => Err(constructia_core::AppError::validation(format!(
                "Invalid account status: '{s}'. Expected one of: active, inactive, suspended"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "active".parse::<AccountStatus>().unwrap(),
            AccountStatus::Active
        );
        assert_eq!(
            "SUSPENDED".parse::<AccountStatus>().unwrap(),
            AccountStatus::Suspended
        );
        assert!("deleted".parse::<AccountStatus>().is_err());
    }
}
