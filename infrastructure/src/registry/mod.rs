//! Tool registry: construction, immutable snapshots, and the live
//! lock-swapped registry implementing the router port.

pub mod builder;
pub mod registry;
pub mod snapshot;

pub use builder::RegistryBuilder;
pub use registry::ToolRegistry;
pub use snapshot::{AdapterEntry, RegistrySnapshot, RegistryStats};
