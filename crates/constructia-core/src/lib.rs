//! # constructia-core
//!
//! Core crate for ConstructIA. Contains configuration schemas, the
//! unified error system, the local-state capability trait, and the
//! audit event contract.
//!
//! This crate has **no** internal dependencies on other ConstructIA crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
