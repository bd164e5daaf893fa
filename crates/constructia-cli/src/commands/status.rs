//! Session status display, driving the auth guard the way the
//! dashboard's protected routes do.

use constructia_auth::{AuthGuard, GuardState};
use constructia_core::result::AppResult;
use constructia_entity::session::SessionKind;
use constructia_entity::user::UserRecord;

use crate::context::CliContext;
use crate::output;

pub async fn run(ctx: &CliContext, kind: Option<SessionKind>) -> AppResult<()> {
    let kinds = match kind {
        Some(kind) => vec![kind],
        None => vec![SessionKind::Client, SessionKind::Admin],
    };

    for kind in kinds {
        let mut guard = AuthGuard::new(ctx.sessions.clone(), kind);
        guard.mount().await;
        render(ctx, kind, guard.state());
    }

    Ok(())
}

/// Render one guard state the way the dashboard's protected routes do:
/// a placeholder while loading, an access-restricted panel when
/// unauthenticated, and the session details once authenticated.
fn render(ctx: &CliContext, kind: SessionKind, state: &GuardState) {
    println!("[{kind}]");
    match state {
        GuardState::Loading => {
            println!("  Checking session...");
        }
        GuardState::Unauthenticated => {
            output::print_warning("Access restricted: no active session");
            output::print_kv("Sign in at", "/");
        }
        GuardState::Authenticated(record) => {
            output::print_success("Session active");
            output::print_kv("Email", record.email());
            output::print_kv("Name", record.user.display_name());
            output::print_kv("Signed in", &record.login_time.to_rfc3339());
            output::print_kv(
                "Expires",
                &record.expires_at(ctx.sessions.ttl()).to_rfc3339(),
            );
            if let UserRecord::Admin(admin) = &record.user {
                output::print_kv("Role", admin.role.as_str());
                output::print_kv("Permissions", &admin.permissions.join(", "));
            }
        }
    }
    println!();
}
