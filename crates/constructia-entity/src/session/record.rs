//! Session record entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::kind::SessionKind;
use crate::user::UserRecord;

/// A persisted snapshot of an authenticated principal.
///
/// Created on successful authentication, read on every guard mount, and
/// destroyed on logout or lazily when a read finds it older than the
/// session TTL. At most one record per [`SessionKind`] exists at a time;
/// a new login overwrites it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// The session namespace.
    #[serde(rename = "type")]
    pub kind: SessionKind,
    /// When the session was established.
    pub login_time: DateTime<Utc>,
    /// Snapshot of the authenticated principal.
    pub user: UserRecord,
}

impl SessionRecord {
    /// Snapshot the given principal at the current time.
    pub fn new(user: UserRecord) -> Self {
        Self {
            kind: user.kind(),
            login_time: Utc::now(),
            user,
        }
    }

    /// Whether the session has outlived the given TTL.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        Utc::now() - self.login_time >= ttl
    }

    /// When the session will expire.
    pub fn expires_at(&self, ttl: Duration) -> DateTime<Utc> {
        self.login_time + ttl
    }

    /// The principal's email.
    pub fn email(&self) -> &str {
        self.user.email()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::{AccountStatus, AdminRole, AdminUser};

    fn admin_record(login_time: DateTime<Utc>) -> SessionRecord {
        SessionRecord {
            kind: SessionKind::Admin,
            login_time,
            user: UserRecord::Admin(AdminUser {
                id: "admin-admin".to_string(),
                username: "admin".to_string(),
                email: "admin@constructia.com".to_string(),
                role: AdminRole::Admin,
                permissions: AdminRole::Admin.default_permissions(),
                name: "Admin".to_string(),
                status: AccountStatus::Active,
                last_login: None,
            }),
        }
    }

    #[test]
    fn test_fresh_record_is_not_expired() {
        let record = admin_record(Utc::now());
        assert!(!record.is_expired(Duration::hours(24)));
    }

    #[test]
    fn test_record_past_ttl_is_expired() {
        let record = admin_record(Utc::now() - Duration::hours(25));
        assert!(record.is_expired(Duration::hours(24)));
    }

    #[test]
    fn test_record_at_exact_ttl_is_expired() {
        let record = admin_record(Utc::now() - Duration::hours(24));
        assert!(record.is_expired(Duration::hours(24)));
    }

    #[test]
    fn test_serialized_form_carries_type_tag() {
        let record = admin_record(Utc::now());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "admin");
        assert_eq!(json["user"]["type"], "admin");
    }
}
