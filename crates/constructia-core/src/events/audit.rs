//! Audit event contract.
//!
//! Admin modules call [`emit`] on mount and on every mutating action.
//! Emission is fire-and-forget: a failing sink is logged and never
//! propagates into the calling flow.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::result::AppResult;

/// A single audit trail entry.
///
/// Only the action name is required; table, record id and the old/new
/// payloads are optional context for a diff-style trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The action that was performed (e.g. `"client.login"`,
    /// `"documents.approve"`).
    pub action: String,
    /// The table the action touched, if any.
    pub table_name: Option<String>,
    /// The affected record id, if any.
    pub record_id: Option<String>,
    /// Row state before the action.
    pub old_data: Option<serde_json::Value>,
    /// Row state after the action.
    pub new_data: Option<serde_json::Value>,
    /// When the action occurred.
    pub occurred_at: DateTime<Utc>,
}

impl AuditEvent {
    /// Create an event with just an action name.
    pub fn action(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            table_name: None,
            record_id: None,
            old_data: None,
            new_data: None,
            occurred_at: Utc::now(),
        }
    }

    /// Attach the table the action touched.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table_name = Some(table.into());
        self
    }

    /// Attach the affected record id.
    pub fn record(mut self, record_id: impl Into<String>) -> Self {
        self.record_id = Some(record_id.into());
        self
    }

    /// Attach before/after payloads for a diff-style trail.
    pub fn diff(
        mut self,
        old_data: Option<serde_json::Value>,
        new_data: Option<serde_json::Value>,
    ) -> Self {
        self.old_data = old_data;
        self.new_data = new_data;
        self
    }
}

/// Append-only destination for audit events.
#[async_trait]
pub trait AuditSink: Send + Sync + std::fmt::Debug + 'static {
    /// Append an event to the trail.
    async fn append(&self, event: AuditEvent) -> AppResult<()>;
}

/// Emit an audit event without blocking or failing the caller.
///
/// The append runs on a spawned task; failures are logged and dropped.
pub fn emit(sink: &Arc<dyn AuditSink>, event: AuditEvent) {
    let sink = Arc::clone(sink);
    let action = event.action.clone();
    tokio::spawn(async move {
        if let Err(e) = sink.append(event).await {
            warn!(action = %action, error = %e, "Failed to append audit event");
        }
    });
}

/// Sink that writes audit events to the tracing log.
///
/// Used when the remote store is not configured, so the trail is still
/// observable in development.
#[derive(Debug, Clone, Default)]
pub struct LogAuditSink;

#[async_trait]
impl AuditSink for LogAuditSink {
    async fn append(&self, event: AuditEvent) -> AppResult<()> {
        info!(
            action = %event.action,
            table = event.table_name.as_deref().unwrap_or("-"),
            record = event.record_id.as_deref().unwrap_or("-"),
            "audit"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_fills_optional_context() {
        let event = AuditEvent::action("clients.update")
            .table("clients")
            .record("client-42")
            .diff(None, Some(serde_json::json!({"status": "active"})));

        assert_eq!(event.action, "clients.update");
        assert_eq!(event.table_name.as_deref(), Some("clients"));
        assert_eq!(event.record_id.as_deref(), Some("client-42"));
        assert!(event.old_data.is_none());
        assert!(event.new_data.is_some());
    }

    #[tokio::test]
    async fn test_emit_never_fails_caller() {
        #[derive(Debug)]
        struct FailingSink;

        #[async_trait]
        impl AuditSink for FailingSink {
            async fn append(&self, _event: AuditEvent) -> AppResult<()> {
                Err(crate::AppError::database("sink down"))
            }
        }

        let sink: Arc<dyn AuditSink> = Arc::new(FailingSink);
        emit(&sink, AuditEvent::action("dashboard.mount"));
        // Give the spawned task a chance to run; the point is that we
        // get here without an error surfacing.
        tokio::task::yield_now().await;
    }
}
