//! Registry construction.
//!
//! The builder drives adapter registration: initialize each adapter, pull
//! its tool list, validate names, build the canonical index and alias
//! table, then freeze everything into a [`RegistrySnapshot`].
//!
//! Startup is partial by design: an adapter that fails to initialize or
//! to list its tools is recorded as unavailable and contributes no tools,
//! while the rest of the registry comes up normally. Name and duplicate
//! violations are configuration errors and fail registration outright.

use std::sync::Arc;

use tracing::{debug, warn};

use toolgate_domain::identifier::{alias_of, canonical_id, validate_name};
use toolgate_domain::{
    Adapter, AdapterDescriptor, AdapterRecord, AdapterStatus, GatewayError, RegisteredTool,
    ToolDescriptor,
};

use super::snapshot::{AdapterEntry, RegistrySnapshot};

/// Builds a [`RegistrySnapshot`] one adapter at a time.
#[derive(Default)]
pub struct RegistryBuilder {
    snapshot: RegistrySnapshot,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an executable adapter: initialize it, discover its tools,
    /// and index them.
    ///
    /// Initialization and discovery failures downgrade the adapter to
    /// [`AdapterStatus::Unavailable`] instead of failing the build.
    pub async fn register(&mut self, adapter: Arc<dyn Adapter>) -> Result<(), GatewayError> {
        let descriptor = adapter.descriptor().clone();
        self.check_adapter_id(&descriptor)?;

        if let Err(err) = adapter.initialize().await {
            warn!(adapter = %descriptor.id, error = %err, "Adapter failed to initialize");
            self.insert_unavailable(descriptor, err.to_string());
            return Ok(());
        }

        let tools = match adapter.list_tools().await {
            Ok(tools) => tools,
            Err(err) => {
                warn!(adapter = %descriptor.id, error = %err, "Adapter failed to list tools");
                self.insert_unavailable(descriptor, err.to_string());
                return Ok(());
            }
        };

        self.index_tools(&descriptor.id, &tools, true)?;
        self.snapshot.adapters.insert(
            descriptor.id.clone(),
            AdapterEntry {
                record: AdapterRecord::new(descriptor, AdapterStatus::Ready),
                runtime: Some(adapter),
            },
        );
        Ok(())
    }

    /// Register a mock adapter: catalog-visible tools with no runtime.
    pub fn register_mock(
        &mut self,
        descriptor: AdapterDescriptor,
        tools: Vec<ToolDescriptor>,
    ) -> Result<(), GatewayError> {
        self.check_adapter_id(&descriptor)?;
        self.index_tools(&descriptor.id, &tools, false)?;
        self.snapshot.adapters.insert(
            descriptor.id.clone(),
            AdapterEntry {
                record: AdapterRecord::new(descriptor, AdapterStatus::Mock),
                runtime: None,
            },
        );
        Ok(())
    }

    pub fn build(self) -> RegistrySnapshot {
        self.snapshot
    }

    fn check_adapter_id(&self, descriptor: &AdapterDescriptor) -> Result<(), GatewayError> {
        if let Err(reason) = validate_name(&descriptor.id) {
            return Err(GatewayError::AdapterRegistration {
                adapter: descriptor.id.clone(),
                message: format!("invalid adapter id: {reason}"),
            });
        }
        if self.snapshot.adapters.contains_key(&descriptor.id) {
            return Err(GatewayError::AdapterRegistration {
                adapter: descriptor.id.clone(),
                message: "adapter id already registered".to_string(),
            });
        }
        Ok(())
    }

    fn insert_unavailable(&mut self, descriptor: AdapterDescriptor, reason: String) {
        self.snapshot.adapters.insert(
            descriptor.id.clone(),
            AdapterEntry {
                record: AdapterRecord::new(descriptor, AdapterStatus::Unavailable { reason }),
                runtime: None,
            },
        );
    }

    /// Validate and index an adapter's tools. All-or-nothing per adapter:
    /// names and duplicates are checked before anything is inserted.
    fn index_tools(
        &mut self,
        adapter_id: &str,
        tools: &[ToolDescriptor],
        executable: bool,
    ) -> Result<(), GatewayError> {
        let mut indexed: Vec<(String, RegisteredTool)> = Vec::with_capacity(tools.len());
        for tool in tools {
            if let Err(reason) = validate_name(&tool.name) {
                return Err(GatewayError::InvalidToolName {
                    adapter: adapter_id.to_string(),
                    name: tool.name.clone(),
                    reason: reason.to_string(),
                });
            }
            let canonical = canonical_id(adapter_id, &tool.name);
            if self.snapshot.tools.contains_key(&canonical)
                || indexed.iter().any(|(id, _)| id == &canonical)
            {
                return Err(GatewayError::DuplicateTool(canonical));
            }
            if tool.is_unclassified() {
                warn!(
                    tool = %canonical,
                    "Tool declares no risk or scope metadata; most restrictive policy applies"
                );
            }
            let registered =
                RegisteredTool::new(canonical.clone(), adapter_id, tool.clone(), executable);
            indexed.push((canonical, registered));
        }

        for (canonical, registered) in indexed {
            if let Some(alias) = alias_of(&canonical) {
                let taken = self.snapshot.tools.contains_key(&alias)
                    || self.snapshot.aliases.contains_key(&alias);
                if taken {
                    // First registration keeps the alias; later ones stay
                    // reachable by canonical id only.
                    warn!(tool = %canonical, alias = %alias, "Alias already taken, dropping");
                } else {
                    self.snapshot.aliases.insert(alias, canonical.clone());
                }
            }
            debug!(tool = %registered.canonical_id, executable, "Registered tool");
            self.snapshot.tools.insert(canonical, registered);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use toolgate_domain::{AdapterError, CallContext, HealthStatus, UpstreamFailure};

    struct ListedAdapter {
        descriptor: AdapterDescriptor,
        tools: Vec<ToolDescriptor>,
        fail_init: bool,
    }

    impl ListedAdapter {
        fn new(id: &str, tools: Vec<ToolDescriptor>) -> Self {
            Self {
                descriptor: AdapterDescriptor::new(id, id, "test"),
                tools,
                fail_init: false,
            }
        }
    }

    #[async_trait]
    impl Adapter for ListedAdapter {
        fn descriptor(&self) -> &AdapterDescriptor {
            &self.descriptor
        }

        async fn initialize(&self) -> Result<(), AdapterError> {
            if self.fail_init {
                Err(AdapterError::Initialize("credentials rejected".into()))
            } else {
                Ok(())
            }
        }

        async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, AdapterError> {
            Ok(self.tools.clone())
        }

        async fn call_tool(
            &self,
            _name: &str,
            params: &serde_json::Value,
            _ctx: &CallContext,
        ) -> Result<serde_json::Value, UpstreamFailure> {
            Ok(json!({ "echo": params }))
        }

        async fn health_check(&self) -> HealthStatus {
            HealthStatus::healthy("ok")
        }
    }

    fn tool(name: &str) -> ToolDescriptor {
        ToolDescriptor::new(name, "test tool")
            .with_risk_level(toolgate_domain::RiskLevel::Low)
    }

    #[tokio::test]
    async fn test_register_indexes_canonical_and_alias() {
        let mut builder = RegistryBuilder::new();
        builder
            .register(Arc::new(ListedAdapter::new(
                "memory-service",
                vec![tool("bulk-delete")],
            )))
            .await
            .unwrap();

        let snapshot = builder.build();
        let canonical = snapshot.resolve("memory-service:bulk-delete").unwrap();
        assert_eq!(canonical.adapter_id, "memory-service");
        let aliased = snapshot.resolve("memory_service:bulk_delete").unwrap();
        assert_eq!(aliased.canonical_id, "memory-service:bulk-delete");
    }

    #[tokio::test]
    async fn test_failed_initialize_is_partial_startup() {
        let mut builder = RegistryBuilder::new();
        let mut failing = ListedAdapter::new("broken", vec![tool("op")]);
        failing.fail_init = true;
        builder.register(Arc::new(failing)).await.unwrap();
        builder
            .register(Arc::new(ListedAdapter::new("healthy", vec![tool("op")])))
            .await
            .unwrap();

        let snapshot = builder.build();
        assert!(snapshot.resolve("broken:op").is_none());
        assert!(snapshot.resolve("healthy:op").is_some());

        let broken = snapshot.adapter("broken").unwrap();
        assert!(matches!(
            broken.record.status,
            AdapterStatus::Unavailable { .. }
        ));
        assert_eq!(snapshot.stats().executable_adapters, 1);
    }

    #[tokio::test]
    async fn test_invalid_tool_name_fails_registration() {
        let mut builder = RegistryBuilder::new();
        let err = builder
            .register(Arc::new(ListedAdapter::new(
                "svc",
                vec![ToolDescriptor::new("Bad Name", "broken")],
            )))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_TOOL_NAME");
    }

    #[tokio::test]
    async fn test_duplicate_canonical_id_rejected() {
        // kebab normalization makes these two names collide.
        let mut builder = RegistryBuilder::new();
        let err = builder
            .register(Arc::new(ListedAdapter::new(
                "svc",
                vec![tool("bulk-delete"), tool("bulk_delete")],
            )))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "DUPLICATE_TOOL");
    }

    #[tokio::test]
    async fn test_duplicate_adapter_id_rejected() {
        let mut builder = RegistryBuilder::new();
        builder
            .register(Arc::new(ListedAdapter::new("svc", vec![tool("a")])))
            .await
            .unwrap();
        let err = builder
            .register(Arc::new(ListedAdapter::new("svc", vec![tool("b")])))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "ADAPTER_REGISTRATION");
    }

    #[tokio::test]
    async fn test_mock_tools_visible_but_not_executable() {
        let mut builder = RegistryBuilder::new();
        builder
            .register_mock(
                AdapterDescriptor::new("docsign", "DocSign", "documents"),
                vec![tool("send-envelope")],
            )
            .unwrap();

        let snapshot = builder.build();
        let registered = snapshot.resolve("docsign:send-envelope").unwrap();
        assert!(!registered.executable);
        assert_eq!(
            snapshot.adapter("docsign").unwrap().record.status,
            AdapterStatus::Mock
        );
    }
}
