//! The polymorphic authenticated principal.

use serde::{Deserialize, Serialize};

use super::admin::AdminUser;
use super::client::ClientUser;
use crate::session::SessionKind;

/// The authenticated principal, polymorphic over the two account kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum UserRecord {
    /// A client-facing account.
    Client(ClientUser),
    /// An admin account.
    Admin(AdminUser),
}

impl UserRecord {
    /// The session namespace this principal belongs to.
    pub fn kind(&self) -> SessionKind {
        match self {
            Self::Client(_) => SessionKind::Client,
            Self::Admin(_) => SessionKind::Admin,
        }
    }

    /// The principal's unique identifier.
    pub fn id(&self) -> &str {
        match self {
            Self::Client(c) => &c.id,
            Self::Admin(a) => &a.id,
        }
    }

    /// The principal's email.
    pub fn email(&self) -> &str {
        match self {
            Self::Client(c) => &c.email,
            Self::Admin(a) => &a.email,
        }
    }

    /// The principal's display name.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Client(c) => &c.name,
            Self::Admin(a) => &a.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::{AccountStatus, AdminRole};
    use chrono::Utc;

    #[test]
    fn test_kind_follows_variant() {
        let client = UserRecord::Client(ClientUser {
            id: "client-1".to_string(),
            name: "Cliente".to_string(),
            email: "c@example.com".to_string(),
            company: "Obra SA".to_string(),
            status: AccountStatus::Active,
            subscription_plan: "basic".to_string(),
            subscription_status: "active".to_string(),
            available_tokens: 100,
            monthly_allowance: 100,
            storage_limit_gb: 10,
            created_at: Utc::now(),
        });
        assert_eq!(client.kind(), SessionKind::Client);

        let admin = UserRecord::Admin(AdminUser {
            id: "admin-admin".to_string(),
            username: "admin".to_string(),
            email: "admin@constructia.com".to_string(),
            role: AdminRole::Admin,
            permissions: vec![],
            name: "Admin".to_string(),
            status: AccountStatus::Active,
            last_login: None,
        });
        assert_eq!(admin.kind(), SessionKind::Admin);
    }
}
