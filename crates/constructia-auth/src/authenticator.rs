//! Credential validation with fail-closed semantics.

use std::sync::Arc;

use tracing::{debug, error, warn};

use constructia_core::config::auth::AuthConfig;
use constructia_entity::session::SessionKind;
use constructia_entity::user::UserRecord;

use crate::allowlist::AllowList;
use crate::directory::ClientDirectory;
use crate::password::PasswordVerifier;

/// Validates credentials against the allow-list and the remote client
/// directory.
///
/// `authenticate` is total: every internal failure, from connection
/// loss to policy rejections, resolves to `None`. Nothing is persisted
/// here; on a match the caller decides whether to establish a session.
pub struct Authenticator {
    allowlist: AllowList,
    directory: Option<Arc<dyn ClientDirectory>>,
    verifier: Arc<dyn PasswordVerifier>,
    shared_access_password: String,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("directory", &self.directory.is_some())
            .finish()
    }
}

impl Authenticator {
    /// Creates a new authenticator.
    ///
    /// `directory` is `None` when the remote store is not configured;
    /// the allow-list path works regardless.
    pub fn new(
        config: &AuthConfig,
        allowlist: AllowList,
        directory: Option<Arc<dyn ClientDirectory>>,
        verifier: Arc<dyn PasswordVerifier>,
    ) -> Self {
        Self {
            allowlist,
            directory,
            verifier,
            shared_access_password: config.shared_access_password.clone(),
        }
    }

    /// Validate credentials for the given session kind.
    ///
    /// Returns the normalized principal on a match, `None` otherwise.
    /// Never fails loud: error conditions are logged and resolve to
    /// `None`.
    pub async fn authenticate(
        &self,
        kind: SessionKind,
        identifier: &str,
        password: &str,
    ) -> Option<UserRecord> {
        match kind {
            SessionKind::Client => self.authenticate_client(identifier, password).await,
            SessionKind::Admin => self.authenticate_admin(identifier, password),
        }
    }

    /// Client flow, in strict precedence order:
    ///
    /// 1. Allow-list exact match on email + password returns
    ///    immediately, the directory is never consulted.
    /// 2. Directory lookup by exact email. Policy rejections are a
    ///    negative match, not an error.
    /// 3. On a row, accept the shared access password or the stored
    ///    password, then normalize missing quota fields.
    async fn authenticate_client(&self, identifier: &str, password: &str) -> Option<UserRecord> {
        if let Some(entry) = self.allowlist.find_client(identifier) {
            if entry.password == password {
                debug!(email = %identifier, "Allow-list match");
                return Some(UserRecord::Client(entry.profile.clone()));
            }
        }

        let directory = match &self.directory {
            Some(directory) => directory,
            None => {
                debug!(email = %identifier, "No remote directory configured");
                return None;
            }
        };

        let account = match directory.find_by_email(identifier).await {
            Ok(Some(account)) => account,
            Ok(None) => {
                debug!(email = %identifier, "No client row for email");
                return None;
            }
            Err(e) if e.is_policy_denial() => {
                debug!(email = %identifier, error = %e, "Directory query denied by policy, treating as no match");
                return None;
            }
            Err(e) => {
                error!(email = %identifier, error = %e, "Directory query failed");
                return None;
            }
        };

        let stored = account.password.clone().unwrap_or_default();
        let matched = password == self.shared_access_password
            || match self.verifier.verify(password, &stored) {
                Ok(matched) => matched,
                Err(e) => {
                    warn!(email = %identifier, error = %e, "Password verification failed");
                    false
                }
            };

        if !matched {
            debug!(email = %identifier, "Password mismatch");
            return None;
        }

        Some(UserRecord::Client(account.into_user()))
    }

    /// Admin flow: compiled-in credential map only, no remote lookup.
    fn authenticate_admin(&self, username: &str, password: &str) -> Option<UserRecord> {
        let entry = self.allowlist.find_admin(username)?;
        if entry.password != password {
            debug!(username = %username, "Admin password mismatch");
            return None;
        }
        Some(UserRecord::Admin(self.allowlist.admin_profile(username)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use constructia_core::error::AppError;
    use constructia_core::result::AppResult;
    use constructia_entity::user::{AccountStatus, ClientAccount};

    #[derive(Debug)]
    struct EmptyDirectory;

    #[async_trait]
    impl ClientDirectory for EmptyDirectory {
        async fn find_by_email(&self, _email: &str) -> AppResult<Option<ClientAccount>> {
            Ok(None)
        }
    }

    #[derive(Debug)]
    struct DenyingDirectory;

    #[async_trait]
    impl ClientDirectory for DenyingDirectory {
        async fn find_by_email(&self, _email: &str) -> AppResult<Option<ClientAccount>> {
            Err(AppError::authorization("row-level security policy violated"))
        }
    }

    fn authenticator(directory: Option<Arc<dyn ClientDirectory>>) -> Authenticator {
        Authenticator::new(
            &AuthConfig::default(),
            AllowList::builtin(),
            directory,
            Arc::new(crate::password::PlainTextVerifier::new()),
        )
    }

    #[tokio::test]
    async fn test_allowlist_match_without_directory() {
        let auth = authenticator(None);
        let user = auth
            .authenticate(SessionKind::Client, "cliente@test.com", "password123")
            .await
            .expect("allow-list entry should authenticate");

        match user {
            UserRecord::Client(client) => {
                assert_eq!(client.id, "test-client-001");
                assert_eq!(client.available_tokens, 5000);
            }
            UserRecord::Admin(_) => panic!("expected a client"),
        }
    }

    #[tokio::test]
    async fn test_wrong_password_is_a_miss() {
        let auth = authenticator(Some(Arc::new(EmptyDirectory)));
        let result = auth
            .authenticate(SessionKind::Client, "cliente@test.com", "wrongpass")
            .await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_policy_denial_resolves_to_none() {
        let auth = authenticator(Some(Arc::new(DenyingDirectory)));
        let result = auth
            .authenticate(SessionKind::Client, "obra@example.com", "whatever")
            .await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_admin_credentials() {
        let auth = authenticator(None);

        let user = auth
            .authenticate(SessionKind::Admin, "superadmin", "super2024!")
            .await
            .expect("superadmin should authenticate");
        match user {
            UserRecord::Admin(admin) => {
                assert!(admin.role.is_superadmin());
                assert_eq!(admin.status, AccountStatus::Active);
            }
            UserRecord::Client(_) => panic!("expected an admin"),
        }

        assert!(auth
            .authenticate(SessionKind::Admin, "superadmin", "nope")
            .await
            .is_none());
        assert!(auth
            .authenticate(SessionKind::Admin, "intruder", "super2024!")
            .await
            .is_none());
    }
}
