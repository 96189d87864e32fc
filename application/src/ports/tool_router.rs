//! Tool router port.
//!
//! Defines how the application layer reaches the registry: identifier
//! resolution, catalog reads, and dispatch to the owning adapter. The
//! implementation (the registry with its canonical index and alias table)
//! lives in the infrastructure layer.

use async_trait::async_trait;

use toolgate_domain::{
    AdapterRecord, CallContext, GatewayError, HealthStatus, RegisteredTool,
};

/// Port for identifier resolution, catalog reads, and adapter dispatch.
///
/// Resolution and catalog reads are synchronous in-memory operations over a
/// stable snapshot; only `dispatch` and `health` suspend (outbound network
/// calls).
#[async_trait]
pub trait ToolRouterPort: Send + Sync {
    /// Resolve a canonical or aliased tool id. O(1) in both branches.
    fn resolve(&self, tool_id: &str) -> Result<RegisteredTool, GatewayError>;

    /// All registered adapters, including mocks and unavailable ones.
    fn list_adapters(&self) -> Vec<AdapterRecord>;

    /// Tools of one adapter. Fails with `AdapterNotFound` for unknown ids.
    fn list_tools(&self, adapter_id: &str) -> Result<Vec<RegisteredTool>, GatewayError>;

    /// Every registered tool across all adapters (the intent resolver's
    /// search space).
    fn catalog(&self) -> Vec<RegisteredTool>;

    /// Dispatch a resolved tool call to its owning adapter.
    async fn dispatch(
        &self,
        tool: &RegisteredTool,
        params: &serde_json::Value,
        ctx: &CallContext,
    ) -> Result<serde_json::Value, GatewayError>;

    /// Health of every executable adapter, keyed by adapter id.
    async fn health(&self) -> Vec<(String, HealthStatus)>;
}
