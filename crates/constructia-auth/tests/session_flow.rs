//! Integration tests for the session lifecycle: establish, read,
//! expiry, independence, and destroy.

mod common;

use chrono::{Duration, Utc};

use constructia_auth::{AuthGuard, GuardState};
use constructia_core::traits::StateStore;
use constructia_entity::session::{SessionKind, SessionRecord};
use constructia_entity::user::UserRecord;
use constructia_store::keys;

use common::{authenticator, session_service};

async fn client_user() -> UserRecord {
    authenticator(None)
        .authenticate(SessionKind::Client, "cliente@test.com", "password123")
        .await
        .expect("demo client should authenticate")
}

async fn admin_user() -> UserRecord {
    authenticator(None)
        .authenticate(SessionKind::Admin, "admin", "admin2024!")
        .await
        .expect("demo admin should authenticate")
}

#[tokio::test]
async fn test_establish_then_read_roundtrip() {
    let (sessions, _store) = session_service();
    let user = client_user().await;

    assert!(sessions.establish(&user).await);

    let record = sessions
        .read(SessionKind::Client)
        .await
        .expect("fresh session should read back");
    assert_eq!(record.kind, SessionKind::Client);
    assert_eq!(record.email(), "cliente@test.com");
    assert!(sessions.is_authenticated(SessionKind::Client).await);
}

#[tokio::test]
async fn test_establish_writes_all_four_keys() {
    let (sessions, store) = session_service();
    sessions.establish(&client_user().await).await;

    let kind = SessionKind::Client;
    for key in [
        keys::id(kind),
        keys::email(kind),
        keys::session(kind),
        keys::login_timestamp(kind),
    ] {
        assert!(store.exists(&key).await.unwrap(), "missing key: {key}");
    }
    assert_eq!(
        store.get(&keys::id(kind)).await.unwrap().as_deref(),
        Some("test-client-001")
    );
}

#[tokio::test]
async fn test_new_login_overwrites_previous_session() {
    let (sessions, store) = session_service();

    sessions.establish(&client_user().await).await;

    let other = authenticator(None)
        .authenticate(SessionKind::Client, "demo@constructia.com", "demo2024")
        .await
        .unwrap();
    sessions.establish(&other).await;

    let record = sessions.read(SessionKind::Client).await.unwrap();
    assert_eq!(record.email(), "demo@constructia.com");
    assert_eq!(
        store
            .get(&keys::email(SessionKind::Client))
            .await
            .unwrap()
            .as_deref(),
        Some("demo@constructia.com")
    );
}

#[tokio::test]
async fn test_sessions_are_independent_across_kinds() {
    let (sessions, _store) = session_service();

    sessions.establish(&admin_user().await).await;
    sessions.establish(&client_user().await).await;

    // Establishing the client session left the admin session readable.
    assert!(sessions.is_authenticated(SessionKind::Admin).await);
    assert!(sessions.is_authenticated(SessionKind::Client).await);

    // Destroying one kind leaves the other alone.
    sessions.destroy(SessionKind::Client).await;
    assert!(!sessions.is_authenticated(SessionKind::Client).await);
    assert!(sessions.is_authenticated(SessionKind::Admin).await);
}

#[tokio::test]
async fn test_expired_session_reads_none_and_cleans_up() {
    let (sessions, store) = session_service();
    let kind = SessionKind::Client;

    sessions.establish(&client_user().await).await;

    // Backdate the stored record past the 24h TTL.
    let mut record: SessionRecord = serde_json::from_str(
        &store.get(&keys::session(kind)).await.unwrap().unwrap(),
    )
    .unwrap();
    record.login_time = Utc::now() - Duration::hours(25);
    store
        .set(&keys::session(kind), &serde_json::to_string(&record).unwrap())
        .await
        .unwrap();

    assert!(sessions.read(kind).await.is_none());

    // The lazy expiry performed the full cleanup.
    for key in [
        keys::id(kind),
        keys::email(kind),
        keys::session(kind),
        keys::login_timestamp(kind),
    ] {
        assert!(!store.exists(&key).await.unwrap(), "leftover key: {key}");
    }
}

#[tokio::test]
async fn test_session_just_under_ttl_is_still_valid() {
    let (sessions, store) = session_service();
    let kind = SessionKind::Client;

    sessions.establish(&client_user().await).await;

    let mut record: SessionRecord = serde_json::from_str(
        &store.get(&keys::session(kind)).await.unwrap().unwrap(),
    )
    .unwrap();
    record.login_time = Utc::now() - Duration::hours(23);
    store
        .set(&keys::session(kind), &serde_json::to_string(&record).unwrap())
        .await
        .unwrap();

    assert!(sessions.read(kind).await.is_some());
}

#[tokio::test]
async fn test_corrupt_record_reads_none_and_cleans_up() {
    let (sessions, store) = session_service();
    let kind = SessionKind::Admin;

    store
        .set(&keys::session(kind), "{definitely not json")
        .await
        .unwrap();

    assert!(sessions.read(kind).await.is_none());
    assert!(!store.exists(&keys::session(kind)).await.unwrap());
}

#[tokio::test]
async fn test_destroy_is_idempotent() {
    let (sessions, _store) = session_service();

    sessions.establish(&admin_user().await).await;
    sessions.destroy(SessionKind::Admin).await;
    assert!(sessions.read(SessionKind::Admin).await.is_none());

    // Second destroy is a quiet no-op.
    sessions.destroy(SessionKind::Admin).await;
    assert!(sessions.read(SessionKind::Admin).await.is_none());
}

#[tokio::test]
async fn test_destroy_clears_registration_stash() {
    let (sessions, store) = session_service();

    assert!(sessions.stash_registration("temp-4711").await);
    let (temp_id, _started) = sessions.registration().await.unwrap();
    assert_eq!(temp_id, "temp-4711");

    sessions.destroy(SessionKind::Client).await;
    assert!(sessions.registration().await.is_none());
    assert!(
        !store
            .exists(&keys::temp_id(SessionKind::Client))
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_guard_mount_logout_cycle() {
    let (sessions, _store) = session_service();
    sessions.establish(&admin_user().await).await;

    let mut guard = AuthGuard::new(sessions.clone(), SessionKind::Admin);
    assert!(guard.is_loading());

    guard.mount().await;
    assert!(guard.is_authenticated());
    assert_eq!(guard.user().unwrap().email(), "admin@constructia.com");

    let route = guard.logout().await;
    assert_eq!(route, "/");
    assert_eq!(*guard.state(), GuardState::Unauthenticated);
    assert!(!sessions.is_authenticated(SessionKind::Admin).await);

    // A fresh mount sees the destroyed session.
    let mut remounted = AuthGuard::new(sessions, SessionKind::Admin);
    remounted.mount().await;
    assert!(!remounted.is_authenticated());
}
