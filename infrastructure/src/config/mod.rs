//! Gateway configuration: file schema and loader.

pub mod file_config;
pub mod loader;

pub use file_config::{
    AdapterEndpoint, AuditSection, AuditSinkKind, ExecutionSection, GatewayFileConfig,
    IntentSection,
};
pub use loader::ConfigLoader;
