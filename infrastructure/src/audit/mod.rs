//! Audit sink implementations.

pub mod sinks;

pub use sinks::{MemoryAuditSink, TracingAuditSink};
