//! Password verification strategies and sign-up policy.

pub mod validator;
pub mod verifier;

pub use validator::PasswordValidator;
pub use verifier::{Argon2Verifier, PasswordVerifier, PlainTextVerifier};
