//! Domain events emitted by ConstructIA operations.
//!
//! The only event family this core owns is the audit trail: every admin
//! module emits an audit event on mount and on mutating actions.

pub mod audit;

pub use audit::{AuditEvent, AuditSink, LogAuditSink, emit};
