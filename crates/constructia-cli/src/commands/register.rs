//! Start a client registration flow.
//!
//! Validates the password policy and parks a temporary id plus start
//! timestamp in the client namespace; account creation itself happens
//! in the dashboard. The parked keys are cleared whenever the client
//! session is destroyed.

use dialoguer::{Input, Password};
use uuid::Uuid;

use constructia_auth::PasswordValidator;
use constructia_core::error::AppError;
use constructia_core::events::AuditEvent;
use constructia_core::result::AppResult;

use crate::context::CliContext;
use crate::output;

pub async fn run(ctx: &CliContext, email: Option<String>) -> AppResult<()> {
    let email: String = match email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email")
            .interact_text()
            .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?,
    };

    let password = Password::new()
        .with_prompt("Choose a password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()
        .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;

    PasswordValidator::new(&ctx.config.auth).validate(&password)?;

    let temp_id = format!("temp-{}", Uuid::new_v4());
    if !ctx.sessions.stash_registration(&temp_id).await {
        return Err(AppError::session("Failed to park the registration"));
    }

    ctx.record_audit(
        AuditEvent::action("client.register_started")
            .table("clients")
            .record(temp_id.clone()),
    )
    .await;

    output::print_success(&format!("Registration started for {email}"));
    output::print_kv("Reference", &temp_id);
    println!("Complete the sign-up from the dashboard to activate the account.");
    Ok(())
}
