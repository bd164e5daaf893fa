//! Concrete repository implementations.

pub mod audit;
pub mod client;

pub use audit::AuditLogRepository;
pub use client::ClientRepository;
