//! # constructia-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the remote tables ConstructIA consumes: the
//! client directory and the audit log.

pub mod connection;
pub mod repositories;

pub use connection::DatabasePool;
