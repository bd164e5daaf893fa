//! Recent audit trail display.

use tabled::Tabled;

use constructia_core::error::AppError;
use constructia_core::result::AppResult;
use constructia_entity::audit::AuditLogEntry;

use crate::context::CliContext;
use crate::output;

#[derive(Tabled)]
struct AuditRow {
    #[tabled(rename = "When")]
    created_at: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Table")]
    table_name: String,
    #[tabled(rename = "Record")]
    record_id: String,
}

impl From<&AuditLogEntry> for AuditRow {
    fn from(entry: &AuditLogEntry) -> Self {
        Self {
            created_at: entry.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            action: entry.action.clone(),
            table_name: entry.table_name.clone().unwrap_or_else(|| "-".to_string()),
            record_id: entry.record_id.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub async fn run(ctx: &CliContext, limit: i64) -> AppResult<()> {
    let repo = ctx.audit_repo.as_ref().ok_or_else(|| {
        AppError::configuration("The audit trail requires a configured remote store")
    })?;

    let entries = repo.find_recent(limit).await?;
    let rows: Vec<AuditRow> = entries.iter().map(Into::into).collect();
    output::print_list(&rows);
    Ok(())
}
