//! Gateway configuration file schema.
//!
//! Loaded from `toolgate.toml` (see [`super::loader`]). Every section has
//! working defaults, so an absent file yields a usable configuration.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use toolgate_application::config::ExecutionParams;
use toolgate_domain::DEFAULT_INTENT_LIMIT;

/// Root of the gateway configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayFileConfig {
    pub execution: ExecutionSection,
    pub intent: IntentSection,
    pub audit: AuditSection,
    /// HTTP adapter endpoints, keyed by adapter id.
    pub adapters: BTreeMap<String, AdapterEndpoint>,
}

impl GatewayFileConfig {
    /// Engine parameters derived from the file sections.
    pub fn execution_params(&self) -> ExecutionParams {
        let timeout = match self.execution.default_timeout_ms {
            // 0 disables the default deadline entirely.
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        };
        ExecutionParams::default()
            .with_default_timeout(timeout)
            .with_intent_limit(self.intent.limit)
    }
}

/// `[execution]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionSection {
    /// Default dispatch deadline in milliseconds; 0 disables it.
    pub default_timeout_ms: u64,
}

impl Default for ExecutionSection {
    fn default() -> Self {
        Self { default_timeout_ms: 30_000 }
    }
}

/// `[intent]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentSection {
    /// Default number of alternatives returned by the intent resolver.
    pub limit: usize,
}

impl Default for IntentSection {
    fn default() -> Self {
        Self { limit: DEFAULT_INTENT_LIMIT }
    }
}

/// `[audit]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditSection {
    pub sink: AuditSinkKind,
}

/// Which audit sink to wire at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditSinkKind {
    /// Discard audit entries.
    None,
    /// Structured log events (the default).
    #[default]
    Tracing,
    /// In-memory buffer, for tests and local inspection.
    Memory,
}

/// One `[adapters.<id>]` entry: an HTTP endpoint plus fallbacks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterEndpoint {
    pub base_url: String,
    /// Fallback endpoints, tried in order after the primary.
    pub fallback_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
