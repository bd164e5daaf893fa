//! CLI bootstrap: wires configuration, state, database, and auth.

use std::sync::Arc;

use tracing::{info, warn};

use constructia_auth::allowlist::AllowList;
use constructia_auth::directory::{ClientDirectory, DatabaseDirectory};
use constructia_auth::password::PlainTextVerifier;
use constructia_auth::{Authenticator, SessionService};
use constructia_core::config::AppConfig;
use constructia_core::events::{AuditEvent, AuditSink, LogAuditSink};
use constructia_core::result::AppResult;
use constructia_core::traits::StateStore;
use constructia_database::DatabasePool;
use constructia_database::repositories::{AuditLogRepository, ClientRepository};
use constructia_store::{FileStateStore, MemoryStateStore};

/// Everything a command needs, built once at startup.
///
/// The remote store is optional: without it the authenticator falls
/// back to the allow-list only and audit events go to the log sink.
pub struct CliContext {
    /// Loaded application configuration.
    pub config: AppConfig,
    /// Session operations over the persisted local state.
    pub sessions: Arc<SessionService>,
    /// Credential validation.
    pub authenticator: Arc<Authenticator>,
    /// Audit event destination.
    pub audit: Arc<dyn AuditSink>,
    /// Audit reads; present only with a configured database.
    pub audit_repo: Option<Arc<AuditLogRepository>>,
}

impl CliContext {
    /// Build the context from configuration.
    pub async fn init(config: AppConfig) -> AppResult<Self> {
        let store = open_store(&config).await?;
        let sessions = Arc::new(SessionService::new(store, config.session.clone()));

        let (directory, audit, audit_repo) = match connect_remote(&config).await {
            Some(pool) => {
                let client_repo = Arc::new(ClientRepository::new(pool.pool().clone()));
                let audit_repo = Arc::new(AuditLogRepository::new(pool.pool().clone()));
                let directory: Arc<dyn ClientDirectory> =
                    Arc::new(DatabaseDirectory::new(client_repo));
                let audit: Arc<dyn AuditSink> = audit_repo.clone();
                (Some(directory), audit, Some(audit_repo))
            }
            None => {
                let audit: Arc<dyn AuditSink> = Arc::new(LogAuditSink);
                (None, audit, None)
            }
        };

        let authenticator = Arc::new(Authenticator::new(
            &config.auth,
            AllowList::builtin(),
            directory,
            Arc::new(PlainTextVerifier::new()),
        ));

        Ok(Self {
            config,
            sessions,
            authenticator,
            audit,
            audit_repo,
        })
    }

    /// Append an audit event, logging failures instead of surfacing
    /// them; the calling action already succeeded.
    pub async fn record_audit(&self, event: AuditEvent) {
        if let Err(e) = self.audit.append(event).await {
            warn!(error = %e, "Failed to append audit event");
        }
    }
}

async fn open_store(config: &AppConfig) -> AppResult<Arc<dyn StateStore>> {
    match config.state.provider.as_str() {
        "memory" => Ok(Arc::new(MemoryStateStore::new())),
        _ => {
            let store = FileStateStore::open(&config.state.path).await?;
            Ok(Arc::new(store))
        }
    }
}

/// Connect to the remote store if configured.
///
/// An unreachable remote store is reported but does not abort startup:
/// the allow-list login path must keep working without it.
async fn connect_remote(config: &AppConfig) -> Option<DatabasePool> {
    if !config.database.is_configured() {
        info!("Remote store not configured, running allow-list only");
        return None;
    }

    match DatabasePool::connect(&config.database).await {
        Ok(pool) => Some(pool),
        Err(e) => {
            warn!(error = %e, "Remote store unreachable, running allow-list only");
            None
        }
    }
}
