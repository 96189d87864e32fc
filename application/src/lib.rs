//! Application layer for toolgate
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    audit_sink::{AuditSinkError, AuditSinkPort, NoAuditSink},
    schema_validator::{AcceptAllValidator, SchemaValidatorPort, ValidationIssue},
    tool_router::ToolRouterPort,
};
pub use use_cases::catalog::{AdapterFilter, CatalogUseCase, ToolFilter};
pub use use_cases::execute_tool::ExecuteToolUseCase;
pub use use_cases::resolve_intent::ResolveIntentUseCase;
