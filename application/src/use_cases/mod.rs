//! Use cases (application services)
//!
//! Each use case orchestrates domain logic through the ports, without
//! knowing which infrastructure implements them.

pub mod catalog;
pub mod execute_tool;
pub mod resolve_intent;

pub use catalog::{AdapterFilter, CatalogUseCase, ToolFilter};
pub use execute_tool::ExecuteToolUseCase;
pub use resolve_intent::ResolveIntentUseCase;
