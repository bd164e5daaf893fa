//! Session namespace enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two independent session namespaces.
///
/// Admin and client sessions never interact: establishing or destroying
/// one leaves the other untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    /// Client-facing dashboard session.
    Client,
    /// Admin dashboard session.
    Admin,
}

impl SessionKind {
    /// The storage key prefix for this namespace.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Client => "constructia_client",
            Self::Admin => "constructia_admin",
        }
    }

    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SessionKind {
    type Err = constructia_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "client" => Ok(Self::Client),
            "admin" => Ok(Self::Admin),
            _ => Err(constructia_core::AppError::validation(format!(
                "Invalid session kind: '{s}'. Expected one of: client, admin"
            ))),
        }
    }
}
