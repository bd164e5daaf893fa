//! The two-step admin access gate.
//!
//! A shared passphrase must be verified before the credential form is
//! even reachable. This is a sequenced UI flow, not a security
//! boundary: the passphrase is an equality check against a configured
//! secret, wrong input keeps the machine in place with an error, and
//! there is no lockout or retry limit.

use std::sync::Arc;

use tracing::debug;

use constructia_core::config::auth::AuthConfig;
use constructia_core::error::AppError;
use constructia_core::result::AppResult;
use constructia_entity::session::SessionKind;
use constructia_entity::user::{AdminUser, UserRecord};

use crate::authenticator::Authenticator;

/// Where the gate currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    /// Waiting for the shared passphrase.
    AwaitingPassphrase,
    /// Passphrase accepted; waiting for username/password.
    AwaitingCredentials,
    /// Credentials accepted.
    Authenticated,
}

/// The admin login state machine.
///
/// `AwaitingPassphrase` → `AwaitingCredentials` → `Authenticated`, with
/// every wrong input leaving the phase unchanged.
pub struct AdminGate {
    phase: GatePhase,
    passphrase: String,
    authenticator: Arc<Authenticator>,
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate").field("phase", &self.phase).finish()
    }
}

impl AdminGate {
    /// Creates a gate in the initial `AwaitingPassphrase` phase.
    pub fn new(config: &AuthConfig, authenticator: Arc<Authenticator>) -> Self {
        Self {
            phase: GatePhase::AwaitingPassphrase,
            passphrase: config.admin_passphrase.clone(),
            authenticator,
        }
    }

    /// The current phase.
    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    /// Submit the shared passphrase.
    ///
    /// On a match the gate advances to `AwaitingCredentials`; otherwise
    /// it stays where it is and surfaces an error message.
    pub fn submit_passphrase(&mut self, input: &str) -> AppResult<()> {
        if self.phase != GatePhase::AwaitingPassphrase {
            return Err(AppError::authentication("Passphrase already verified"));
        }

        if input != self.passphrase {
            debug!("Admin passphrase rejected");
            return Err(AppError::authentication("Incorrect access phrase"));
        }

        self.phase = GatePhase::AwaitingCredentials;
        Ok(())
    }

    /// Submit admin credentials.
    ///
    /// Rejected without consulting the credential map unless the
    /// passphrase step has been passed. On success the gate advances to
    /// `Authenticated` and returns the admin profile; on failure it
    /// stays in `AwaitingCredentials`.
    pub async fn submit_credentials(
        &mut self,
        username: &str,
        password: &str,
    ) -> AppResult<AdminUser> {
        if self.phase == GatePhase::AwaitingPassphrase {
            return Err(AppError::authentication(
                "Access phrase must be verified first",
            ));
        }
        if self.phase == GatePhase::Authenticated {
            return Err(AppError::authentication("Already authenticated"));
        }

        match self
            .authenticator
            .authenticate(SessionKind::Admin, username, password)
            .await
        {
            Some(UserRecord::Admin(admin)) => {
                self.phase = GatePhase::Authenticated;
                Ok(admin)
            }
            _ => Err(AppError::authentication("Invalid username or password")),
        }
    }

    /// Return the gate to its initial phase.
    pub fn reset(&mut self) {
        self.phase = GatePhase::AwaitingPassphrase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allowlist::AllowList;
    use crate::password::PlainTextVerifier;

    fn gate() -> AdminGate {
        let config = AuthConfig::default();
        let authenticator = Arc::new(Authenticator::new(
            &config,
            AllowList::builtin(),
            None,
            Arc::new(PlainTextVerifier::new()),
        ));
        AdminGate::new(&config, authenticator)
    }

    #[test]
    fn test_starts_awaiting_passphrase() {
        assert_eq!(gate().phase(), GatePhase::AwaitingPassphrase);
    }

    #[test]
    fn test_wrong_passphrase_keeps_phase() {
        let mut gate = gate();
        let err = gate.submit_passphrase("wrong").unwrap_err();
        assert_eq!(err.message, "Incorrect access phrase");
        assert_eq!(gate.phase(), GatePhase::AwaitingPassphrase);
    }

    #[tokio::test]
    async fn test_credentials_rejected_before_passphrase() {
        let mut gate = gate();
        let err = gate.submit_credentials("admin", "admin2024!").await.unwrap_err();
        assert_eq!(err.message, "Access phrase must be verified first");
        assert_eq!(gate.phase(), GatePhase::AwaitingPassphrase);
    }

    #[tokio::test]
    async fn test_full_sequence() {
        let mut gate = gate();
        gate.submit_passphrase("obra-segura-2024").unwrap();
        assert_eq!(gate.phase(), GatePhase::AwaitingCredentials);

        let err = gate.submit_credentials("admin", "nope").await.unwrap_err();
        assert_eq!(err.message, "Invalid username or password");
        assert_eq!(gate.phase(), GatePhase::AwaitingCredentials);

        let admin = gate.submit_credentials("admin", "admin2024!").await.unwrap();
        assert_eq!(admin.username, "admin");
        assert_eq!(gate.phase(), GatePhase::Authenticated);
    }

    #[tokio::test]
    async fn test_reset_returns_to_start() {
        let mut gate = gate();
        gate.submit_passphrase("obra-segura-2024").unwrap();
        gate.reset();
        assert_eq!(gate.phase(), GatePhase::AwaitingPassphrase);
    }
}
