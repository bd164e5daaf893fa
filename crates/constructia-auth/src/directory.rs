//! The remote client directory seam.

use std::sync::Arc;

use async_trait::async_trait;

use constructia_core::result::AppResult;
use constructia_database::repositories::ClientRepository;
use constructia_entity::user::ClientAccount;

/// Lookup interface over the remote `clients` table.
///
/// The authenticator depends on this trait instead of the concrete
/// repository so tests can substitute fakes, including ones that fail
/// with policy errors.
#[async_trait]
pub trait ClientDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Find a client by email. Case-sensitive exact match, at most one
    /// row returned.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<ClientAccount>>;
}

/// Directory backed by the PostgreSQL client repository.
#[derive(Debug, Clone)]
pub struct DatabaseDirectory {
    repo: Arc<ClientRepository>,
}

impl DatabaseDirectory {
    /// Wrap a client repository.
    pub fn new(repo: Arc<ClientRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ClientDirectory for DatabaseDirectory {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<ClientAccount>> {
        self.repo.find_by_email(email).await
    }
}
