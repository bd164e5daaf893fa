//! Interactive login for both surfaces.

use dialoguer::{Input, Password};

use constructia_auth::AdminGate;
use constructia_core::error::AppError;
use constructia_core::events::AuditEvent;
use constructia_core::result::AppResult;
use constructia_entity::session::SessionKind;
use constructia_entity::user::UserRecord;

use super::KindArg;
use crate::context::CliContext;
use crate::output;

pub async fn run(ctx: &CliContext, kind: KindArg, identifier: Option<String>) -> AppResult<()> {
    match kind {
        KindArg::Client => login_client(ctx, identifier).await,
        KindArg::Admin => login_admin(ctx, identifier).await,
    }
}

/// Client login: one email/password attempt against the authenticator.
async fn login_client(ctx: &CliContext, identifier: Option<String>) -> AppResult<()> {
    let email = match identifier {
        Some(email) => email,
        None => prompt_input("Email")?,
    };
    let password = prompt_password("Password")?;

    let user = ctx
        .authenticator
        .authenticate(SessionKind::Client, &email, &password)
        .await
        .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

    establish_and_report(ctx, user).await
}

/// Admin login: drives the two-step gate. Wrong input at either step
/// keeps the gate in place and the prompt repeats.
async fn login_admin(ctx: &CliContext, identifier: Option<String>) -> AppResult<()> {
    let mut gate = AdminGate::new(&ctx.config.auth, ctx.authenticator.clone());

    loop {
        let passphrase = prompt_password("Access phrase")?;
        match gate.submit_passphrase(&passphrase) {
            Ok(()) => break,
            Err(e) => output::print_error(&e.message),
        }
    }

    let user = loop {
        let username = match &identifier {
            Some(username) => username.clone(),
            None => prompt_input("Username")?,
        };
        let password = prompt_password("Password")?;

        match gate.submit_credentials(&username, &password).await {
            Ok(admin) => break UserRecord::Admin(admin),
            Err(e) => output::print_error(&e.message),
        }
    };

    establish_and_report(ctx, user).await
}

async fn establish_and_report(ctx: &CliContext, user: UserRecord) -> AppResult<()> {
    let kind = user.kind();

    if !ctx.sessions.establish(&user).await {
        return Err(AppError::session("Failed to persist the session"));
    }

    ctx.record_audit(
        AuditEvent::action(format!("{kind}.login")).record(user.id().to_string()),
    )
    .await;

    output::print_success(&format!("Signed in as {}", user.email()));
    if let UserRecord::Client(client) = &user {
        output::print_kv("Company", &client.company);
        output::print_kv("Plan", &client.subscription_plan);
        output::print_kv("Tokens", &client.available_tokens.to_string());
    }

    Ok(())
}

fn prompt_input(label: &str) -> AppResult<String> {
    Input::new()
        .with_prompt(label)
        .interact_text()
        .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))
}

fn prompt_password(label: &str) -> AppResult<String> {
    Password::new()
        .with_prompt(label)
        .interact()
        .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))
}
