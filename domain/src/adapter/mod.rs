//! Adapter domain: the backend integration contract.

pub mod contract;
pub mod descriptor;
pub mod health;

pub use contract::{Adapter, AdapterError};
pub use descriptor::{AdapterDescriptor, AdapterRecord, AdapterStatus};
pub use health::HealthStatus;
