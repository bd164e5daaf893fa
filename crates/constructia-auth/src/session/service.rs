//! Session store operations over the injected local state.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, error, info, warn};

use constructia_core::config::session::SessionConfig;
use constructia_core::result::AppResult;
use constructia_core::traits::StateStore;
use constructia_entity::session::{SessionKind, SessionRecord};
use constructia_entity::user::UserRecord;
use constructia_store::keys;

/// Owns every session record in the local state.
///
/// All public methods are total: failures are logged and surface as
/// `false`/`None`/no-op, never as errors. Admin and client sessions are
/// fully independent; within a kind a new session silently replaces the
/// old one.
#[derive(Debug, Clone)]
pub struct SessionService {
    store: Arc<dyn StateStore>,
    config: SessionConfig,
}

impl SessionService {
    /// Creates a session service over the given state store.
    pub fn new(store: Arc<dyn StateStore>, config: SessionConfig) -> Self {
        Self { store, config }
    }

    /// Snapshot the principal into a session record and persist it,
    /// overwriting any prior session of the same kind.
    ///
    /// Returns `false` only if the persistence write fails.
    pub async fn establish(&self, user: &UserRecord) -> bool {
        match self.try_establish(user).await {
            Ok(()) => true,
            Err(e) => {
                error!(kind = %user.kind(), error = %e, "Failed to establish session");
                false
            }
        }
    }

    async fn try_establish(&self, user: &UserRecord) -> AppResult<()> {
        let kind = user.kind();
        let record = SessionRecord::new(user.clone());
        let json = serde_json::to_string(&record)?;

        self.store.set(&keys::session(kind), &json).await?;
        self.store.set(&keys::id(kind), user.id()).await?;
        self.store.set(&keys::email(kind), user.email()).await?;
        self.store
            .set(&keys::login_timestamp(kind), &record.login_time.to_rfc3339())
            .await?;

        info!(kind = %kind, email = %user.email(), "Session established");
        Ok(())
    }

    /// Read the current session for a kind.
    ///
    /// Returns `None` when no session exists, when the stored value
    /// does not parse (the corrupt state is cleaned up), or when the
    /// record has outlived the TTL, in which case the destroy side
    /// effect runs before returning. Expiry is only ever detected here;
    /// nothing sweeps in the background.
    pub async fn read(&self, kind: SessionKind) -> Option<SessionRecord> {
        let raw = match self.store.get(&keys::session(kind)).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(kind = %kind, error = %e, "Failed to read session state");
                return None;
            }
        };

        let record: SessionRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                warn!(kind = %kind, error = %e, "Corrupt session record, cleaning up");
                self.destroy(kind).await;
                return None;
            }
        };

        if record.is_expired(self.ttl()) {
            info!(kind = %kind, login_time = %record.login_time, "Session expired, cleaning up");
            self.destroy(kind).await;
            return None;
        }

        Some(record)
    }

    /// Remove every key belonging to the kind, including the transient
    /// sign-up keys. Destroying an absent session is a no-op.
    pub async fn destroy(&self, kind: SessionKind) {
        match self.store.delete_prefix(kind.prefix()).await {
            Ok(removed) => debug!(kind = %kind, removed, "Session destroyed"),
            Err(e) => warn!(kind = %kind, error = %e, "Failed to destroy session"),
        }
    }

    /// Whether a live session exists for the kind.
    pub async fn is_authenticated(&self, kind: SessionKind) -> bool {
        self.read(kind).await.is_some()
    }

    /// Park a sign-up flow's temporary id and start timestamp in the
    /// client namespace. Cleared by [`destroy`](Self::destroy).
    pub async fn stash_registration(&self, temp_id: &str) -> bool {
        let kind = SessionKind::Client;
        let result: AppResult<()> = async {
            self.store.set(&keys::temp_id(kind), temp_id).await?;
            self.store
                .set(
                    &keys::registration_timestamp(kind),
                    &Utc::now().to_rfc3339(),
                )
                .await?;
            Ok(())
        }
        .await;

        match result {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "Failed to stash registration");
                false
            }
        }
    }

    /// Read back a parked sign-up flow, if one exists.
    pub async fn registration(&self) -> Option<(String, DateTime<Utc>)> {
        let kind = SessionKind::Client;
        let temp_id = self.store.get(&keys::temp_id(kind)).await.ok()??;
        let started = self
            .store
            .get(&keys::registration_timestamp(kind))
            .await
            .ok()??;

        let started = DateTime::parse_from_rfc3339(&started)
            .ok()?
            .with_timezone(&Utc);

        Some((temp_id, started))
    }

    /// The configured session TTL.
    pub fn ttl(&self) -> Duration {
        Duration::hours(self.config.ttl_hours as i64)
    }
}
