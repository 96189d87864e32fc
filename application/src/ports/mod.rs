//! Port definitions (interfaces for infrastructure adapters)
//!
//! Ports define the contracts that infrastructure implementations must
//! fulfill.

pub mod audit_sink;
pub mod schema_validator;
pub mod tool_router;

pub use audit_sink::{AuditSinkError, AuditSinkPort, NoAuditSink};
pub use schema_validator::{AcceptAllValidator, SchemaValidatorPort, ValidationIssue};
pub use tool_router::ToolRouterPort;
