//! State key builders for the per-kind session key layout.
//!
//! Centralising key construction prevents typos and makes it easy to
//! find every key the application writes. All keys for one
//! [`SessionKind`] share that kind's prefix, so destroying a session is
//! a prefix delete.

use constructia_entity::session::SessionKind;

/// Key holding the authenticated principal's id.
pub fn id(kind: SessionKind) -> String {
    format!("{}_id", kind.prefix())
}

/// Key holding the authenticated principal's email.
pub fn email(kind: SessionKind) -> String {
    format!("{}_email", kind.prefix())
}

/// Key holding the JSON-serialized session record.
pub fn session(kind: SessionKind) -> String {
    format!("{}_session", kind.prefix())
}

/// Key holding the login timestamp.
pub fn login_timestamp(kind: SessionKind) -> String {
    format!("{}_login_timestamp", kind.prefix())
}

/// Transient key holding a sign-up flow's temporary id.
pub fn temp_id(kind: SessionKind) -> String {
    format!("{}_temp_id", kind.prefix())
}

/// Transient key holding a sign-up flow's start timestamp.
pub fn registration_timestamp(kind: SessionKind) -> String {
    format!("{}_registration_timestamp", kind.prefix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keys() {
        assert_eq!(session(SessionKind::Client), "constructia_client_session");
        assert_eq!(
            login_timestamp(SessionKind::Client),
            "constructia_client_login_timestamp"
        );
    }

    #[test]
    fn test_every_key_carries_the_kind_prefix() {
        let kind = SessionKind::Admin;
        for key in [
            id(kind),
            email(kind),
            session(kind),
            login_timestamp(kind),
            temp_id(kind),
            registration_timestamp(kind),
        ] {
            assert!(key.starts_with(kind.prefix()), "key without prefix: {key}");
        }
    }
}
