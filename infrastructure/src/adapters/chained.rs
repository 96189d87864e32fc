//! Chained adapter: ordered backends with rule-gated fallback.
//!
//! Backends are tried strictly in declaration order. After a failure the
//! domain rule [`is_fallback_eligible`] decides whether the next backend
//! may be tried: "the endpoint doesn't know this tool" falls through,
//! while auth failures and server errors stop the chain immediately (the
//! next backend would reject the same credentials, and a 5xx may have
//! had side effects). The error surfaced to the caller is always the
//! last failure observed.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use toolgate_domain::{
    is_fallback_eligible, Adapter, AdapterDescriptor, AdapterError, CallContext, HealthStatus,
    ToolDescriptor, UpstreamFailure,
};

use super::backend::ToolBackend;

pub struct ChainedAdapter {
    descriptor: AdapterDescriptor,
    tools: Vec<ToolDescriptor>,
    backends: Vec<Arc<dyn ToolBackend>>,
}

impl ChainedAdapter {
    pub fn new(descriptor: AdapterDescriptor) -> Self {
        Self { descriptor, tools: Vec::new(), backends: Vec::new() }
    }

    // ==================== Builder Methods ====================

    pub fn with_tool(mut self, tool: ToolDescriptor) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn with_tools(mut self, tools: impl IntoIterator<Item = ToolDescriptor>) -> Self {
        self.tools.extend(tools);
        self
    }

    /// Append a backend. Order of calls is the fallback order.
    pub fn with_backend(mut self, backend: Arc<dyn ToolBackend>) -> Self {
        self.backends.push(backend);
        self
    }
}

#[async_trait]
impl Adapter for ChainedAdapter {
    fn descriptor(&self) -> &AdapterDescriptor {
        &self.descriptor
    }

    /// Probe the chain. At least one reachable backend is required; the
    /// rest are allowed to be down and merely logged.
    async fn initialize(&self) -> Result<(), AdapterError> {
        if self.backends.is_empty() {
            return Err(AdapterError::Initialize("no backends configured".into()));
        }

        let mut failures = Vec::new();
        for backend in &self.backends {
            match backend.probe().await {
                Ok(()) => {
                    debug!(adapter = %self.descriptor.id, backend = backend.id(), "Backend reachable");
                }
                Err(failure) => {
                    warn!(
                        adapter = %self.descriptor.id,
                        backend = backend.id(),
                        error = %failure,
                        "Backend probe failed"
                    );
                    failures.push(format!("{}: {}", backend.id(), failure));
                }
            }
        }

        if failures.len() == self.backends.len() {
            return Err(AdapterError::Initialize(failures.join("; ")));
        }
        Ok(())
    }

    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, AdapterError> {
        Ok(self.tools.clone())
    }

    async fn call_tool(
        &self,
        name: &str,
        params: &serde_json::Value,
        ctx: &CallContext,
    ) -> Result<serde_json::Value, UpstreamFailure> {
        let total = self.backends.len();
        for (position, backend) in self.backends.iter().enumerate() {
            if ctx.cancellation.is_cancelled() {
                return Err(UpstreamFailure::network("call cancelled"));
            }

            match backend.invoke(name, params, ctx).await {
                Ok(value) => return Ok(value),
                Err(failure) => {
                    let remaining = position + 1 < total;
                    if remaining && is_fallback_eligible(&failure) {
                        warn!(
                            adapter = %self.descriptor.id,
                            backend = backend.id(),
                            tool = name,
                            error = %failure,
                            "Backend failed, trying next candidate"
                        );
                        continue;
                    }
                    return Err(failure);
                }
            }
        }
        Err(UpstreamFailure::network("no backends configured"))
    }

    async fn health_check(&self) -> HealthStatus {
        for backend in &self.backends {
            if backend.probe().await.is_ok() {
                return HealthStatus::healthy(format!("backend {} reachable", backend.id()));
            }
        }
        HealthStatus::unhealthy("no backend reachable")
    }
}
