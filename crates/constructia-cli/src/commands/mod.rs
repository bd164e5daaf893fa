//! CLI command definitions and dispatch.

pub mod audit;
pub mod login;
pub mod logout;
pub mod register;
pub mod status;

use clap::{Parser, Subcommand, ValueEnum};

use constructia_core::config::AppConfig;
use constructia_core::result::AppResult;
use constructia_entity::session::SessionKind;

use crate::context::CliContext;

/// ConstructIA session and audit management.
#[derive(Debug, Parser)]
#[command(name = "constructia", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sign in and establish a session.
    Login {
        /// Which surface to sign in to.
        #[arg(value_enum)]
        kind: KindArg,
        /// Login email (client) or username (admin); prompted if omitted.
        #[arg(long)]
        identifier: Option<String>,
    },
    /// Destroy the current session.
    Logout {
        /// Which surface to sign out of.
        #[arg(value_enum)]
        kind: KindArg,
    },
    /// Show the current session state.
    Status {
        /// Limit to one surface; both are shown if omitted.
        #[arg(value_enum)]
        kind: Option<KindArg>,
    },
    /// Start a client registration.
    Register {
        /// Login email; prompted if omitted.
        #[arg(long)]
        email: Option<String>,
    },
    /// Show recent audit trail entries.
    Audit {
        /// Maximum number of entries to show.
        #[arg(long, default_value_t = 20)]
        limit: i64,
    },
}

/// CLI-facing session kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Client dashboard session.
    Client,
    /// Admin dashboard session.
    Admin,
}

impl From<KindArg> for SessionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Client => SessionKind::Client,
            KindArg::Admin => SessionKind::Admin,
        }
    }
}

impl Cli {
    /// Execute the parsed command.
    pub async fn execute(self, config: AppConfig) -> AppResult<()> {
        let ctx = CliContext::init(config).await?;

        match self.command {
            Command::Login { kind, identifier } => login::run(&ctx, kind, identifier).await,
            Command::Logout { kind } => logout::run(&ctx, kind.into()).await,
            Command::Status { kind } => status::run(&ctx, kind.map(Into::into)).await,
            Command::Register { email } => register::run(&ctx, email).await,
            Command::Audit { limit } => audit::run(&ctx, limit).await,
        }
    }
}
