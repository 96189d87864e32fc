//! Catalog use case: adapter and tool discovery reads.
//!
//! Pure reads over the registry snapshot. Mock and unavailable adapters
//! stay visible here so callers can see the full surface even when parts
//! of it cannot execute.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use toolgate_domain::{AdapterRecord, GatewayError, RegisteredTool};

use crate::ports::tool_router::ToolRouterPort;

/// Optional filters for adapter listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterFilter {
    pub category: Option<String>,
    pub capability: Option<String>,
}

impl AdapterFilter {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capability = Some(capability.into());
        self
    }

    fn matches(&self, record: &AdapterRecord) -> bool {
        if let Some(category) = &self.category {
            if &record.descriptor.category != category {
                return false;
            }
        }
        if let Some(capability) = &self.capability {
            if !record.descriptor.capabilities.contains(capability) {
                return false;
            }
        }
        true
    }
}

/// Optional filters for tool listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolFilter {
    /// Matches against tool tags.
    pub category: Option<String>,
    /// Case-insensitive substring over name and description.
    pub search: Option<String>,
}

impl ToolFilter {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    fn matches(&self, tool: &RegisteredTool) -> bool {
        if let Some(category) = &self.category {
            if !tool.descriptor.tags.iter().any(|tag| tag == category) {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let in_name = tool.descriptor.name.to_lowercase().contains(&needle);
            let in_description = tool.descriptor.description.to_lowercase().contains(&needle);
            if !in_name && !in_description {
                return false;
            }
        }
        true
    }
}

pub struct CatalogUseCase<R: ToolRouterPort> {
    router: Arc<R>,
}

impl<R: ToolRouterPort> CatalogUseCase<R> {
    pub fn new(router: Arc<R>) -> Self {
        Self { router }
    }

    /// All adapters matching the filter, mocks and unavailable included.
    pub fn list_adapters(&self, filter: &AdapterFilter) -> Vec<AdapterRecord> {
        self.router
            .list_adapters()
            .into_iter()
            .filter(|record| filter.matches(record))
            .collect()
    }

    /// Tools of one adapter, filtered. Unknown adapter ids are an error,
    /// not an empty list.
    pub fn list_tools(
        &self,
        adapter_id: &str,
        filter: &ToolFilter,
    ) -> Result<Vec<RegisteredTool>, GatewayError> {
        let tools = self.router.list_tools(adapter_id)?;
        Ok(tools.into_iter().filter(|tool| filter.matches(tool)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use toolgate_domain::{
        AdapterDescriptor, AdapterStatus, CallContext, HealthStatus, ToolDescriptor,
    };

    struct StubRouter {
        adapters: Vec<AdapterRecord>,
        tools: Vec<RegisteredTool>,
    }

    #[async_trait]
    impl ToolRouterPort for StubRouter {
        fn resolve(&self, tool_id: &str) -> Result<RegisteredTool, GatewayError> {
            Err(GatewayError::ToolNotFound(tool_id.to_string()))
        }
        fn list_adapters(&self) -> Vec<AdapterRecord> {
            self.adapters.clone()
        }
        fn list_tools(&self, adapter_id: &str) -> Result<Vec<RegisteredTool>, GatewayError> {
            if self.adapters.iter().any(|a| a.descriptor.id == adapter_id) {
                Ok(self.tools.clone())
            } else {
                Err(GatewayError::AdapterNotFound(adapter_id.to_string()))
            }
        }
        fn catalog(&self) -> Vec<RegisteredTool> {
            self.tools.clone()
        }
        async fn dispatch(
            &self,
            _tool: &RegisteredTool,
            _params: &serde_json::Value,
            _ctx: &CallContext,
        ) -> Result<serde_json::Value, GatewayError> {
            Err(GatewayError::ToolNotFound("unused".into()))
        }
        async fn health(&self) -> Vec<(String, HealthStatus)> {
            Vec::new()
        }
    }

    fn router() -> Arc<StubRouter> {
        Arc::new(StubRouter {
            adapters: vec![
                AdapterRecord::new(
                    AdapterDescriptor::new("paystack", "Paystack", "payments")
                        .with_capability("transfers"),
                    AdapterStatus::Ready,
                ),
                AdapterRecord::new(
                    AdapterDescriptor::new("docsign", "DocSign", "documents"),
                    AdapterStatus::Mock,
                ),
            ],
            tools: vec![
                RegisteredTool::new(
                    "paystack:initiate-transfer",
                    "paystack",
                    ToolDescriptor::new("initiate-transfer", "Send money to a recipient")
                        .with_tag("payments"),
                    true,
                ),
                RegisteredTool::new(
                    "paystack:verify",
                    "paystack",
                    ToolDescriptor::new("verify", "Verify a transaction").with_tag("status"),
                    true,
                ),
            ],
        })
    }

    #[test]
    fn test_list_adapters_includes_mocks() {
        let catalog = CatalogUseCase::new(router());
        let all = catalog.list_adapters(&AdapterFilter::default());
        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|a| a.status == AdapterStatus::Mock));
    }

    #[test]
    fn test_adapter_filter_by_category_and_capability() {
        let catalog = CatalogUseCase::new(router());

        let payments =
            catalog.list_adapters(&AdapterFilter::default().with_category("payments"));
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].descriptor.id, "paystack");

        let transfers =
            catalog.list_adapters(&AdapterFilter::default().with_capability("transfers"));
        assert_eq!(transfers.len(), 1);
    }

    #[test]
    fn test_tool_search_is_case_insensitive() {
        let catalog = CatalogUseCase::new(router());
        let found = catalog
            .list_tools("paystack", &ToolFilter::default().with_search("SEND MONEY"))
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].canonical_id, "paystack:initiate-transfer");
    }

    #[test]
    fn test_tool_filter_by_tag() {
        let catalog = CatalogUseCase::new(router());
        let found = catalog
            .list_tools("paystack", &ToolFilter::default().with_category("status"))
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].descriptor.name, "verify");
    }

    #[test]
    fn test_unknown_adapter_is_an_error() {
        let catalog = CatalogUseCase::new(router());
        let err = catalog.list_tools("missing", &ToolFilter::default()).unwrap_err();
        assert_eq!(err.code(), "ADAPTER_NOT_FOUND");
    }
}
