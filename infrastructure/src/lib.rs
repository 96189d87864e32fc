//! Infrastructure layer for toolgate
//!
//! This crate implements the application-layer ports: the live tool
//! registry, fallback-chained adapters with HTTP and in-process
//! backends, JSON Schema validation, audit sinks, and configuration
//! loading. The [`gateway::Gateway`] facade ties them together.

pub mod adapters;
pub mod audit;
pub mod config;
pub mod gateway;
pub mod registry;
pub mod validation;

// Re-export commonly used types
pub use adapters::{ChainedAdapter, HttpBackend, InProcessBackend, ToolBackend};
pub use audit::{MemoryAuditSink, TracingAuditSink};
pub use config::{ConfigLoader, GatewayFileConfig};
pub use gateway::{Gateway, GatewayBuilder};
pub use registry::{RegistryBuilder, RegistrySnapshot, RegistryStats, ToolRegistry};
pub use validation::JsonSchemaValidator;
