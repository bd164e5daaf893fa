//! Audit log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An immutable audit log row.
///
/// Rows are append-only; the insert payload is the
/// [`AuditEvent`](constructia_core::events::AuditEvent) contract type.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditLogEntry {
    /// Unique audit entry identifier.
    pub id: Uuid,
    /// The action that was performed (e.g. `"client.login"`).
    pub action: String,
    /// The table the action touched, if any.
    pub table_name: Option<String>,
    /// The affected record id, if any.
    pub record_id: Option<String>,
    /// Row state before the action (JSON).
    pub old_data: Option<serde_json::Value>,
    /// Row state after the action (JSON).
    pub new_data: Option<serde_json::Value>,
    /// When the action occurred.
    pub created_at: DateTime<Utc>,
}
