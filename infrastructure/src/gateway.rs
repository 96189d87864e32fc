//! Gateway facade
//!
//! [`Gateway`] wires the registry, execution engine, intent resolver, and
//! catalog reads into one entry point. [`GatewayBuilder`] handles startup:
//! adapter registration (partial on failure), validator and audit sink
//! selection from configuration, and the final snapshot freeze.
//!
//! ```ignore
//! let gateway = GatewayBuilder::new()
//!     .with_config(ConfigLoader::load(None)?)
//!     .register(Arc::new(paystack_adapter)).await?
//!     .build();
//!
//! let result = gateway
//!     .execute(ExecutionRequest::new("paystack:verify", json!({ "reference": "tx-1" })))
//!     .await;
//! ```

use std::sync::Arc;

use tracing::info;

use toolgate_application::ports::audit_sink::{AuditSinkPort, NoAuditSink};
use toolgate_application::use_cases::catalog::{AdapterFilter, CatalogUseCase, ToolFilter};
use toolgate_application::use_cases::execute_tool::ExecuteToolUseCase;
use toolgate_application::use_cases::resolve_intent::ResolveIntentUseCase;
use toolgate_domain::{
    Adapter, AdapterDescriptor, AdapterRecord, ExecutionRequest, ExecutionResult, GatewayError,
    HealthStatus, IntentQuery, IntentResult, RegisteredTool, ToolDescriptor,
};

use crate::adapters::{ChainedAdapter, HttpBackend};
use crate::audit::{MemoryAuditSink, TracingAuditSink};
use crate::config::{AdapterEndpoint, AuditSinkKind, GatewayFileConfig};
use crate::registry::{RegistryBuilder, RegistryStats, ToolRegistry};
use crate::validation::JsonSchemaValidator;

pub struct Gateway {
    registry: Arc<ToolRegistry>,
    engine: ExecuteToolUseCase<ToolRegistry>,
    intent: ResolveIntentUseCase<ToolRegistry>,
    catalog: CatalogUseCase<ToolRegistry>,
}

impl Gateway {
    /// Run one tool call through the policy pipeline.
    pub async fn execute(&self, request: ExecutionRequest) -> ExecutionResult {
        self.engine.execute(request).await
    }

    /// Rank catalog tools against a free-text query.
    pub fn resolve_intent(&self, query: IntentQuery) -> IntentResult {
        self.intent.resolve(query)
    }

    pub fn list_adapters(&self, filter: &AdapterFilter) -> Vec<AdapterRecord> {
        self.catalog.list_adapters(filter)
    }

    pub fn list_tools(
        &self,
        adapter_id: &str,
        filter: &ToolFilter,
    ) -> Result<Vec<RegisteredTool>, GatewayError> {
        self.catalog.list_tools(adapter_id, filter)
    }

    pub async fn health(&self) -> Vec<(String, HealthStatus)> {
        use toolgate_application::ports::tool_router::ToolRouterPort;
        self.registry.health().await
    }

    pub fn stats(&self) -> RegistryStats {
        self.registry.stats()
    }

    /// The live registry, for reload and unregistration.
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }
}

pub struct GatewayBuilder {
    registry: RegistryBuilder,
    config: GatewayFileConfig,
    audit_override: Option<Arc<dyn AuditSinkPort>>,
}

impl GatewayBuilder {
    pub fn new() -> Self {
        Self {
            registry: RegistryBuilder::new(),
            config: GatewayFileConfig::default(),
            audit_override: None,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_config(mut self, config: GatewayFileConfig) -> Self {
        self.config = config;
        self
    }

    /// Install a specific audit sink, overriding the configured kind.
    pub fn with_audit_sink(mut self, sink: Arc<dyn AuditSinkPort>) -> Self {
        self.audit_override = Some(sink);
        self
    }

    /// Register an executable adapter. Initialization failures downgrade
    /// the adapter to unavailable without failing the build.
    pub async fn register(mut self, adapter: Arc<dyn Adapter>) -> Result<Self, GatewayError> {
        self.registry.register(adapter).await?;
        Ok(self)
    }

    /// Register a catalog-only mock adapter.
    pub fn register_mock(
        mut self,
        descriptor: AdapterDescriptor,
        tools: Vec<ToolDescriptor>,
    ) -> Result<Self, GatewayError> {
        self.registry.register_mock(descriptor, tools)?;
        Ok(self)
    }

    /// Register an HTTP adapter from a configured endpoint: the primary
    /// URL followed by its fallbacks, in order.
    pub async fn register_endpoint(
        self,
        adapter_id: &str,
        endpoint: &AdapterEndpoint,
        tools: Vec<ToolDescriptor>,
    ) -> Result<Self, GatewayError> {
        let display_name = endpoint
            .display_name
            .clone()
            .unwrap_or_else(|| adapter_id.to_string());
        let category = endpoint
            .category
            .clone()
            .unwrap_or_else(|| "external".to_string());

        let mut adapter =
            ChainedAdapter::new(AdapterDescriptor::new(adapter_id, display_name, category))
                .with_tools(tools);
        for (index, url) in std::iter::once(&endpoint.base_url)
            .chain(endpoint.fallback_urls.iter())
            .enumerate()
        {
            let mut backend = HttpBackend::new(format!("{adapter_id}-{index}"), url.as_str());
            if let Some(token) = &endpoint.bearer_token {
                backend = backend.with_bearer_token(token);
            }
            adapter = adapter.with_backend(Arc::new(backend));
        }
        self.register(Arc::new(adapter)).await
    }

    /// Freeze the registry and wire the use cases.
    pub fn build(self) -> Gateway {
        let registry = Arc::new(ToolRegistry::new(self.registry.build()));
        let params = self.config.execution_params();

        let audit: Arc<dyn AuditSinkPort> = match self.audit_override {
            Some(sink) => sink,
            None => match self.config.audit.sink {
                AuditSinkKind::None => Arc::new(NoAuditSink),
                AuditSinkKind::Tracing => Arc::new(TracingAuditSink),
                AuditSinkKind::Memory => Arc::new(MemoryAuditSink::new()),
            },
        };

        let engine = ExecuteToolUseCase::new(Arc::clone(&registry))
            .with_validator(Arc::new(JsonSchemaValidator))
            .with_audit_sink(audit)
            .with_params(params.clone());
        let intent = ResolveIntentUseCase::new(Arc::clone(&registry)).with_params(params);
        let catalog = CatalogUseCase::new(Arc::clone(&registry));

        let stats = registry.stats();
        info!(
            adapters = stats.total_adapters,
            executable = stats.executable_adapters,
            tools = stats.total_tools,
            "Gateway ready"
        );

        Gateway { registry, engine, intent, catalog }
    }
}

impl Default for GatewayBuilder {
    fn default() -> Self {
        Self::new()
    }
}
