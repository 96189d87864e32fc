//! Audit entries emitted after every execution.
//!
//! The core emits one [`AuditEntry`] per execution to an external sink,
//! fire-and-forget: a sink failure is logged and never propagates to the
//! caller. Parameters are recorded as a sha256 hash, never verbatim;
//! payloads routinely carry account numbers and document contents.

pub mod entry;

pub use entry::{params_hash, AuditEntry, AuditOutcome};
