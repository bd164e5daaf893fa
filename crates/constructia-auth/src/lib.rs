//! # constructia-auth
//!
//! Authentication and session management for the ConstructIA platform.
//!
//! ## Modules
//!
//! - `allowlist`: compiled-in demo credentials checked before the remote store
//! - `authenticator`: credential validation with fail-closed semantics
//! - `directory`: the remote client directory seam
//! - `gate`: the two-step admin access state machine
//! - `password`: password verification strategies and sign-up policy
//! - `session`: session establish/read/destroy and the consumer-facing guard

pub mod allowlist;
pub mod authenticator;
pub mod directory;
pub mod gate;
pub mod password;
pub mod session;

pub use allowlist::AllowList;
pub use authenticator::Authenticator;
pub use directory::{ClientDirectory, DatabaseDirectory};
pub use gate::{AdminGate, GatePhase};
pub use password::{Argon2Verifier, PasswordValidator, PasswordVerifier, PlainTextVerifier};
pub use session::{AuthGuard, GuardState, SessionService};
