//! Audit log repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use constructia_core::error::{AppError, ErrorKind};
use constructia_core::events::{AuditEvent, AuditSink};
use constructia_core::result::AppResult;
use constructia_entity::audit::AuditLogEntry;

/// Repository for the append-only `audit_log` table.
#[derive(Debug, Clone)]
pub struct AuditLogRepository {
    pool: PgPool,
}

impl AuditLogRepository {
    /// Create a new audit log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the most recent entries, newest first.
    pub async fn find_recent(&self, limit: i64) -> AppResult<Vec<AuditLogEntry>> {
        sqlx::query_as::<_, AuditLogEntry>(
            "SELECT * FROM audit_log ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to read audit log", e)
        })
    }
}

#[async_trait]
impl AuditSink for AuditLogRepository {
    async fn append(&self, event: AuditEvent) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO audit_log (action, table_name, record_id, old_data, new_data, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&event.action)
        .bind(&event.table_name)
        .bind(&event.record_id)
        .bind(&event.old_data)
        .bind(&event.new_data)
        .bind(event.occurred_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to append audit entry", e)
        })?;

        Ok(())
    }
}
