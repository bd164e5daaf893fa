//! Password verification strategies.
//!
//! The current schema stores client passwords as plaintext, so the
//! default strategy is plain string equality, a known weakness kept
//! behind this seam so the control flow never has to change when the
//! stored format does. [`Argon2Verifier`] is the drop-in replacement
//! once rows carry Argon2id hashes.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher as ArgonHasher, SaltString, rand_core::OsRng},
};

use constructia_core::error::AppError;
use constructia_core::result::AppResult;

/// Strategy for checking a candidate password against a stored value.
pub trait PasswordVerifier: Send + Sync + std::fmt::Debug + 'static {
    /// Returns `Ok(true)` if the candidate matches, `Ok(false)` if not.
    fn verify(&self, candidate: &str, stored: &str) -> AppResult<bool>;
}

/// Plain string equality against a plaintext stored password.
#[derive(Debug, Clone, Default)]
pub struct PlainTextVerifier;

impl PlainTextVerifier {
    /// Creates a new plaintext verifier.
    pub fn new() -> Self {
        Self
    }
}

impl PasswordVerifier for PlainTextVerifier {
    fn verify(&self, candidate: &str, stored: &str) -> AppResult<bool> {
        Ok(candidate == stored)
    }
}

/// Argon2id verification against a stored hash.
#[derive(Debug, Clone, Default)]
pub struct Argon2Verifier;

impl Argon2Verifier {
    /// Creates a new Argon2id verifier.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password with a random salt, for writing new
    /// rows once the schema migrates to hashed storage.
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }
}

impl PasswordVerifier for Argon2Verifier {
    fn verify(&self, candidate: &str, stored: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(stored)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        let argon2 = Argon2::default();
        match argon2::PasswordVerifier::verify_password(
            &argon2,
            candidate.as_bytes(),
            &parsed_hash,
        ) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}
