//! Tool domain: descriptors, canonical identifiers, execution policy.

pub mod descriptor;
pub mod identifier;
pub mod registered;

pub use descriptor::{ExecutionPolicy, RiskLevel, ToolDescriptor};
pub use registered::RegisteredTool;
