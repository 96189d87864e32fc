//! Adapter implementations: the fallback-chained adapter and its
//! backend flavors.

pub mod backend;
pub mod chained;
pub mod http;
pub mod in_process;

pub use backend::ToolBackend;
pub use chained::ChainedAdapter;
pub use http::HttpBackend;
pub use in_process::InProcessBackend;
