//! Shared test helpers for the auth integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use constructia_auth::allowlist::AllowList;
use constructia_auth::directory::ClientDirectory;
use constructia_auth::password::PlainTextVerifier;
use constructia_auth::{Authenticator, SessionService};
use constructia_core::config::auth::AuthConfig;
use constructia_core::config::session::SessionConfig;
use constructia_core::error::AppError;
use constructia_core::result::AppResult;
use constructia_core::traits::StateStore;
use constructia_entity::user::{AccountStatus, ClientAccount};
use constructia_store::MemoryStateStore;

/// Directory serving a fixed set of in-memory rows.
#[derive(Debug, Default)]
pub struct StaticDirectory {
    rows: Vec<ClientAccount>,
}

impl StaticDirectory {
    pub fn with_rows(rows: Vec<ClientAccount>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl ClientDirectory for StaticDirectory {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<ClientAccount>> {
        Ok(self.rows.iter().find(|row| row.email == email).cloned())
    }
}

/// Directory that rejects every query with a policy error.
#[derive(Debug)]
pub struct DenyingDirectory;

#[async_trait]
impl ClientDirectory for DenyingDirectory {
    async fn find_by_email(&self, _email: &str) -> AppResult<Option<ClientAccount>> {
        Err(AppError::authorization(
            "permission denied for table clients",
        ))
    }
}

/// A remote row for tests.
pub fn client_row(email: &str, password: &str) -> ClientAccount {
    ClientAccount {
        id: format!("row-{email}"),
        name: "Remote Client".to_string(),
        email: email.to_string(),
        company: "Obras del Norte".to_string(),
        password: Some(password.to_string()),
        status: AccountStatus::Active,
        subscription_plan: "basic".to_string(),
        subscription_status: "active".to_string(),
        available_tokens: None,
        monthly_allowance: None,
        storage_limit_gb: None,
        created_at: Utc::now(),
    }
}

/// An authenticator over the builtin allow-list and the given directory.
pub fn authenticator(directory: Option<Arc<dyn ClientDirectory>>) -> Authenticator {
    Authenticator::new(
        &AuthConfig::default(),
        AllowList::builtin(),
        directory,
        Arc::new(PlainTextVerifier::new()),
    )
}

/// A session service over a fresh in-memory store, plus the store
/// itself for direct inspection.
pub fn session_service() -> (Arc<SessionService>, Arc<MemoryStateStore>) {
    let store = Arc::new(MemoryStateStore::new());
    let service = Arc::new(SessionService::new(
        store.clone() as Arc<dyn StateStore>,
        SessionConfig::default(),
    ));
    (service, store)
}
