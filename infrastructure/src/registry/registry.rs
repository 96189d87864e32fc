//! Tool Registry
//!
//! The [`ToolRegistry`] is the live registry: a snapshot behind a lock,
//! swapped atomically on reload. It implements [`ToolRouterPort`] for the
//! application layer.
//!
//! # Concurrency
//!
//! Readers take the read lock only long enough to clone the snapshot
//! `Arc`; resolution and catalog reads then run lock-free against that
//! snapshot. Writers (reload, unregister) are serialized by a separate
//! mutex and publish a fully-built replacement snapshot in one swap, so
//! readers never see partial state.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tracing::info;

use toolgate_application::ports::tool_router::ToolRouterPort;
use toolgate_domain::{
    AdapterRecord, CallContext, GatewayError, HealthStatus, RegisteredTool,
};

use super::snapshot::{RegistrySnapshot, RegistryStats};

pub struct ToolRegistry {
    snapshot: RwLock<Arc<RegistrySnapshot>>,
    /// Serializes writers; readers never touch it.
    write_lock: tokio::sync::Mutex<()>,
}

impl ToolRegistry {
    pub fn new(snapshot: RegistrySnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(snapshot)),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Current snapshot. Cheap: one read-lock acquisition and an `Arc`
    /// clone.
    pub fn current(&self) -> Arc<RegistrySnapshot> {
        let guard = self
            .snapshot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Replace the whole registry with a freshly built snapshot.
    pub async fn reload(&self, snapshot: RegistrySnapshot) {
        let _writer = self.write_lock.lock().await;
        let stats = snapshot.stats();
        self.swap(snapshot);
        info!(
            adapters = stats.total_adapters,
            tools = stats.total_tools,
            "Registry reloaded"
        );
    }

    /// Remove one adapter and all of its tools and aliases.
    pub async fn unregister(&self, adapter_id: &str) -> Result<(), GatewayError> {
        let _writer = self.write_lock.lock().await;
        let current = self.current();
        if current.adapter(adapter_id).is_none() {
            return Err(GatewayError::AdapterNotFound(adapter_id.to_string()));
        }

        let mut next = (*current).clone();
        next.adapters.remove(adapter_id);
        next.tools.retain(|_, tool| tool.adapter_id != adapter_id);
        next.aliases
            .retain(|_, canonical| next.tools.contains_key(canonical));
        self.swap(next);
        info!(adapter = adapter_id, "Adapter unregistered");
        Ok(())
    }

    /// Catalog record of one adapter.
    pub fn get_adapter(&self, adapter_id: &str) -> Option<AdapterRecord> {
        self.current()
            .adapter(adapter_id)
            .map(|entry| entry.record.clone())
    }

    pub fn stats(&self) -> RegistryStats {
        self.current().stats()
    }

    fn swap(&self, snapshot: RegistrySnapshot) {
        let mut guard = self
            .snapshot
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(snapshot);
    }
}

#[async_trait]
impl ToolRouterPort for ToolRegistry {
    fn resolve(&self, tool_id: &str) -> Result<RegisteredTool, GatewayError> {
        self.current()
            .resolve(tool_id)
            .cloned()
            .ok_or_else(|| GatewayError::ToolNotFound(tool_id.to_string()))
    }

    fn list_adapters(&self) -> Vec<AdapterRecord> {
        self.current()
            .adapters()
            .map(|entry| entry.record.clone())
            .collect()
    }

    fn list_tools(&self, adapter_id: &str) -> Result<Vec<RegisteredTool>, GatewayError> {
        let snapshot = self.current();
        if snapshot.adapter(adapter_id).is_none() {
            return Err(GatewayError::AdapterNotFound(adapter_id.to_string()));
        }
        Ok(snapshot.tools_of(adapter_id))
    }

    fn catalog(&self) -> Vec<RegisteredTool> {
        self.current().catalog()
    }

    async fn dispatch(
        &self,
        tool: &RegisteredTool,
        params: &serde_json::Value,
        ctx: &CallContext,
    ) -> Result<serde_json::Value, GatewayError> {
        let snapshot = self.current();
        let runtime = snapshot
            .adapter(&tool.adapter_id)
            .and_then(|entry| entry.runtime.clone())
            .ok_or_else(|| GatewayError::AdapterNotExecutable(tool.adapter_id.clone()))?;

        runtime
            .call_tool(&tool.descriptor.name, params, ctx)
            .await
            .map_err(GatewayError::Upstream)
    }

    async fn health(&self) -> Vec<(String, HealthStatus)> {
        let snapshot = self.current();
        let checks: Vec<_> = snapshot
            .adapters()
            .filter_map(|entry| {
                entry.runtime.clone().map(|runtime| {
                    let id = entry.record.descriptor.id.clone();
                    async move { (id, runtime.health_check().await) }
                })
            })
            .collect();
        futures::future::join_all(checks).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::builder::RegistryBuilder;
    use async_trait::async_trait;
    use serde_json::json;
    use toolgate_domain::{
        Adapter, AdapterDescriptor, AdapterError, RiskLevel, ToolDescriptor, UpstreamFailure,
    };

    struct EchoAdapter {
        descriptor: AdapterDescriptor,
        tools: Vec<ToolDescriptor>,
    }

    impl EchoAdapter {
        fn new(id: &str, tool_names: &[&str]) -> Self {
            Self {
                descriptor: AdapterDescriptor::new(id, id, "test"),
                tools: tool_names
                    .iter()
                    .map(|name| {
                        ToolDescriptor::new(*name, "echo").with_risk_level(RiskLevel::Low)
                    })
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl Adapter for EchoAdapter {
        fn descriptor(&self) -> &AdapterDescriptor {
            &self.descriptor
        }
        async fn initialize(&self) -> Result<(), AdapterError> {
            Ok(())
        }
        async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, AdapterError> {
            Ok(self.tools.clone())
        }
        async fn call_tool(
            &self,
            name: &str,
            params: &serde_json::Value,
            _ctx: &CallContext,
        ) -> Result<serde_json::Value, UpstreamFailure> {
            Ok(json!({ "tool": name, "echo": params }))
        }
        async fn health_check(&self) -> HealthStatus {
            HealthStatus::healthy("ok")
        }
    }

    async fn registry_with(adapters: Vec<EchoAdapter>) -> ToolRegistry {
        let mut builder = RegistryBuilder::new();
        for adapter in adapters {
            builder.register(Arc::new(adapter)).await.unwrap();
        }
        ToolRegistry::new(builder.build())
    }

    #[tokio::test]
    async fn test_resolve_canonical_then_alias() {
        let registry =
            registry_with(vec![EchoAdapter::new("memory-service", &["bulk-delete"])]).await;

        assert!(registry.resolve("memory-service:bulk-delete").is_ok());
        assert!(registry.resolve("memory_service:bulk_delete").is_ok());
        let err = registry.resolve("memory-service:missing").unwrap_err();
        assert_eq!(err.code(), "TOOL_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_dispatch_routes_to_owning_adapter() {
        let registry = registry_with(vec![
            EchoAdapter::new("alpha", &["op"]),
            EchoAdapter::new("beta", &["op"]),
        ])
        .await;

        let tool = registry.resolve("beta:op").unwrap();
        let out = registry
            .dispatch(&tool, &json!({ "k": 1 }), &CallContext::for_tests())
            .await
            .unwrap();
        assert_eq!(out["tool"], "op");
    }

    #[tokio::test]
    async fn test_list_tools_unknown_adapter() {
        let registry = registry_with(vec![EchoAdapter::new("alpha", &["op"])]).await;
        let err = registry.list_tools("missing").unwrap_err();
        assert_eq!(err.code(), "ADAPTER_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_unregister_removes_tools_and_aliases() {
        let registry =
            registry_with(vec![EchoAdapter::new("memory-service", &["bulk-delete"])]).await;

        registry.unregister("memory-service").await.unwrap();
        assert!(registry.resolve("memory-service:bulk-delete").is_err());
        assert!(registry.resolve("memory_service:bulk_delete").is_err());
        assert!(registry.list_adapters().is_empty());

        let err = registry.unregister("memory-service").await.unwrap_err();
        assert_eq!(err.code(), "ADAPTER_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_reload_swaps_whole_catalog() {
        let registry = registry_with(vec![EchoAdapter::new("alpha", &["op"])]).await;
        assert_eq!(registry.stats().total_tools, 1);

        let mut builder = RegistryBuilder::new();
        builder
            .register(Arc::new(EchoAdapter::new("beta", &["one", "two"])))
            .await
            .unwrap();
        registry.reload(builder.build()).await;

        assert!(registry.resolve("alpha:op").is_err());
        assert!(registry.resolve("beta:one").is_ok());
        assert_eq!(registry.stats().total_tools, 2);
    }

    #[tokio::test]
    async fn test_snapshot_is_stable_across_concurrent_reload() {
        let registry = Arc::new(registry_with(vec![EchoAdapter::new("alpha", &["op"])]).await);
        let snapshot = registry.current();

        registry.reload(RegistrySnapshot::default()).await;

        // The old snapshot still resolves; new reads see the empty registry.
        assert!(snapshot.resolve("alpha:op").is_some());
        assert!(registry.resolve("alpha:op").is_err());
    }

    #[tokio::test]
    async fn test_health_covers_executable_adapters_only() {
        let mut builder = RegistryBuilder::new();
        builder
            .register(Arc::new(EchoAdapter::new("alpha", &["op"])))
            .await
            .unwrap();
        builder
            .register_mock(
                AdapterDescriptor::new("docsign", "DocSign", "documents"),
                vec![ToolDescriptor::new("send-envelope", "mock")],
            )
            .unwrap();
        let registry = ToolRegistry::new(builder.build());

        let health = registry.health().await;
        assert_eq!(health.len(), 1);
        assert_eq!(health[0].0, "alpha");
        assert!(health[0].1.healthy);
    }
}
