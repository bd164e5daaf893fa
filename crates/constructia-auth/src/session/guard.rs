//! Consumer-facing session guard.

use std::sync::Arc;

use constructia_entity::session::{SessionKind, SessionRecord};
use constructia_entity::user::UserRecord;

use super::service::SessionService;

/// Route consumers navigate to after logout.
pub const HOME_ROUTE: &str = "/";

/// What the guard currently knows about the session.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardState {
    /// Before the first read has completed. Consumers show a spinner
    /// placeholder.
    Loading,
    /// A live session exists. Consumers render the protected content.
    Authenticated(SessionRecord),
    /// No session, or the session expired. Consumers show their own
    /// fallback or the default access-restricted panel with a link home.
    Unauthenticated,
}

/// Tri-state wrapper around [`SessionService`] for protected surfaces.
///
/// One read per [`mount`](AuthGuard::mount); there is no polling, so an
/// expiry only becomes visible on the next mount or explicit read.
#[derive(Debug, Clone)]
pub struct AuthGuard {
    sessions: Arc<SessionService>,
    kind: SessionKind,
    state: GuardState,
}

impl AuthGuard {
    /// Creates a guard in the `Loading` state.
    pub fn new(sessions: Arc<SessionService>, kind: SessionKind) -> Self {
        Self {
            sessions,
            kind,
            state: GuardState::Loading,
        }
    }

    /// Perform the single session read and settle the state.
    ///
    /// Calling this again re-mounts: the store is consulted once more
    /// and the state updated, which is the only point where a lazy
    /// expiry becomes observable.
    pub async fn mount(&mut self) -> &GuardState {
        self.state = match self.sessions.read(self.kind).await {
            Some(record) => GuardState::Authenticated(record),
            None => GuardState::Unauthenticated,
        };
        &self.state
    }

    /// The current state.
    pub fn state(&self) -> &GuardState {
        &self.state
    }

    /// Whether the guard has not completed its first read.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, GuardState::Loading)
    }

    /// Whether a live session is present.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, GuardState::Authenticated(_))
    }

    /// The authenticated principal, if any.
    pub fn user(&self) -> Option<&UserRecord> {
        match &self.state {
            GuardState::Authenticated(record) => Some(&record.user),
            _ => None,
        }
    }

    /// Destroy the session, clear local state, and return the route the
    /// consumer must hard-navigate to.
    pub async fn logout(&mut self) -> &'static str {
        self.sessions.destroy(self.kind).await;
        self.state = GuardState::Unauthenticated;
        HOME_ROUTE
    }
}
