//! Backend contract for fallback chains.
//!
//! A backend is one candidate endpoint an adapter can invoke a tool
//! against. The chained adapter tries backends in declaration order and
//! consults the domain's fallback rule after each failure.

use async_trait::async_trait;

use toolgate_domain::{CallContext, UpstreamFailure};

/// One invocation candidate in an adapter's fallback chain.
#[async_trait]
pub trait ToolBackend: Send + Sync {
    /// Stable id for logs (e.g. the endpoint host).
    fn id(&self) -> &str;

    /// Cheap reachability check used during adapter initialization.
    async fn probe(&self) -> Result<(), UpstreamFailure> {
        Ok(())
    }

    /// Invoke one tool. The failure shape decides fallback eligibility.
    async fn invoke(
        &self,
        tool: &str,
        params: &serde_json::Value,
        ctx: &CallContext,
    ) -> Result<serde_json::Value, UpstreamFailure>;
}
