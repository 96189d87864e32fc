//! Execution results and metadata.
//!
//! Every execution produces exactly one [`ExecutionResult`], returned
//! synchronously to the caller and not retained by the core. `elapsed_ms`
//! covers resolution through dispatch; audit emission is asynchronous and
//! excluded from latency accounting.

use serde::{Deserialize, Serialize};

use crate::core::error::{ErrorBody, GatewayError};
use crate::tool::descriptor::RiskLevel;

/// Metadata attached to every execution result.
///
/// Adapter/tool/risk fields are absent when the call failed before
/// resolution (e.g. `TOOL_NOT_FOUND`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionMeta {
    /// Gateway-assigned request id.
    pub request_id: String,
    /// Resolution through dispatch, in milliseconds.
    pub elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adapter_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
    /// Effective risk level of the executed tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
}

impl ExecutionMeta {
    pub fn new(request_id: impl Into<String>, elapsed_ms: u64) -> Self {
        Self {
            request_id: request_id.into(),
            elapsed_ms,
            adapter_id: None,
            tool_name: None,
            risk_level: None,
        }
    }

    pub fn with_tool(
        mut self,
        adapter_id: impl Into<String>,
        tool_name: impl Into<String>,
        risk_level: RiskLevel,
    ) -> Self {
        self.adapter_id = Some(adapter_id.into());
        self.tool_name = Some(tool_name.into());
        self.risk_level = Some(risk_level);
        self
    }
}

/// Result of one tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub success: bool,
    /// Adapter-provided payload (for successful execution).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Structured error (for failed execution).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    pub meta: ExecutionMeta,
}

impl ExecutionResult {
    /// Successful result carrying the adapter's payload.
    pub fn ok(data: serde_json::Value, meta: ExecutionMeta) -> Self {
        Self { success: true, data: Some(data), error: None, meta }
    }

    /// Failed result carrying the structured error surface.
    pub fn err(error: &GatewayError, meta: ExecutionMeta) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorBody::from(error)),
            meta,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Error code, if the execution failed.
    pub fn error_code(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.code.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_result() {
        let meta = ExecutionMeta::new("req-1", 12).with_tool("paystack", "verify", RiskLevel::Low);
        let result = ExecutionResult::ok(json!({ "status": "success" }), meta);

        assert!(result.is_success());
        assert!(result.error_code().is_none());
        assert_eq!(result.meta.adapter_id.as_deref(), Some("paystack"));
    }

    #[test]
    fn test_err_result() {
        let err = GatewayError::ToolNotFound("nope:missing".into());
        let result = ExecutionResult::err(&err, ExecutionMeta::new("req-2", 1));

        assert!(!result.is_success());
        assert_eq!(result.error_code(), Some("TOOL_NOT_FOUND"));
        assert!(result.meta.adapter_id.is_none());
    }

    #[test]
    fn test_result_serializes_without_empty_fields() {
        let err = GatewayError::ToolNotFound("nope:missing".into());
        let result = ExecutionResult::err(&err, ExecutionMeta::new("req-3", 0));
        let encoded = serde_json::to_value(&result).unwrap();

        assert!(encoded.get("data").is_none());
        assert!(encoded["meta"].get("adapter_id").is_none());
    }
}
