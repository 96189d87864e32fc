//! Execution requests: what a caller asks the engine to run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Per-call options controlling safety behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionOptions {
    /// Required for tools with `idempotency_required`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    /// Must be `true` for tools with `confirmation_required`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<bool>,
    /// Deadline for the adapter dispatch stage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl ExecutionOptions {
    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    pub fn with_confirmed(mut self, confirmed: bool) -> Self {
        self.confirmed = Some(confirmed);
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Whether the caller explicitly confirmed the call.
    pub fn is_confirmed(&self) -> bool {
        self.confirmed == Some(true)
    }
}

/// The caller's verified identity, as provided by the upstream auth gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallerContext {
    pub actor_id: String,
    #[serde(default)]
    pub scopes: BTreeSet<String>,
}

impl CallerContext {
    pub fn new(actor_id: impl Into<String>) -> Self {
        Self { actor_id: actor_id.into(), scopes: BTreeSet::new() }
    }

    pub fn with_scopes(mut self, scopes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }
}

/// One request to execute a tool. Created per call, never persisted by the
/// core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRequest {
    /// Canonical or aliased tool identifier.
    pub tool_id: String,
    /// Tool parameters (validated against the tool's input schema).
    pub params: serde_json::Value,
    #[serde(default)]
    pub options: ExecutionOptions,
    pub caller: CallerContext,
}

impl ExecutionRequest {
    pub fn new(tool_id: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            tool_id: tool_id.into(),
            params,
            options: ExecutionOptions::default(),
            caller: CallerContext::default(),
        }
    }

    pub fn with_options(mut self, options: ExecutionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_caller(mut self, caller: CallerContext) -> Self {
        self.caller = caller;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_options_default_is_unconfirmed() {
        let options = ExecutionOptions::default();
        assert!(!options.is_confirmed());
        assert!(options.idempotency_key.is_none());
    }

    #[test]
    fn test_confirmed_must_be_exactly_true() {
        assert!(!ExecutionOptions::default().with_confirmed(false).is_confirmed());
        assert!(ExecutionOptions::default().with_confirmed(true).is_confirmed());
    }

    #[test]
    fn test_request_builder() {
        let request = ExecutionRequest::new("paystack:verify", json!({ "reference": "tx-1" }))
            .with_options(ExecutionOptions::default().with_timeout_ms(5_000))
            .with_caller(CallerContext::new("agent-7").with_scopes(["payments:read"]));

        assert_eq!(request.tool_id, "paystack:verify");
        assert_eq!(request.options.timeout_ms, Some(5_000));
        assert!(request.caller.scopes.contains("payments:read"));
    }
}
