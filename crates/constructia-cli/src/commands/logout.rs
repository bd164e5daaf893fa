//! Session logout.

use constructia_auth::AuthGuard;
use constructia_core::events::AuditEvent;
use constructia_core::result::AppResult;
use constructia_entity::session::SessionKind;

use crate::context::CliContext;
use crate::output;

pub async fn run(ctx: &CliContext, kind: SessionKind) -> AppResult<()> {
    let mut guard = AuthGuard::new(ctx.sessions.clone(), kind);
    guard.mount().await;

    if !guard.is_authenticated() {
        output::print_warning(&format!("No active {kind} session"));
        return Ok(());
    }

    let record_id = guard.user().map(|user| user.id().to_string());
    let route = guard.logout().await;

    let mut event = AuditEvent::action(format!("{kind}.logout"));
    if let Some(record_id) = record_id {
        event = event.record(record_id);
    }
    ctx.record_audit(event).await;

    output::print_success(&format!("Signed out of the {kind} dashboard"));
    output::print_kv("Continue at", route);
    Ok(())
}
