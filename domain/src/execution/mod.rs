//! Execution domain: requests, results, call context, fallback rules.

pub mod context;
pub mod fallback;
pub mod request;
pub mod result;

pub use context::CallContext;
pub use fallback::{is_fallback_eligible, UpstreamFailure};
pub use request::{CallerContext, ExecutionOptions, ExecutionRequest};
pub use result::{ExecutionMeta, ExecutionResult};
