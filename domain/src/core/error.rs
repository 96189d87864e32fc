//! Gateway error taxonomy.
//!
//! Every failure surfaced to a caller is a [`GatewayError`] variant with a
//! stable machine-readable [`code()`](GatewayError::code), a human-readable
//! message, and (for policy failures) a [`suggestion()`](GatewayError::suggestion)
//! naming the exact remediation.
//!
//! Errors cross the external interface as a serializable [`ErrorBody`]
//! embedded in an execution result, never as a bare panic.
//!
//! | Variant | Code | Retried by the core? |
//! |---------|------|---------------------|
//! | `ToolNotFound` | `TOOL_NOT_FOUND` | Never |
//! | `AdapterNotExecutable` | `ADAPTER_NOT_EXECUTABLE` | Never |
//! | `InsufficientScope` | `INSUFFICIENT_SCOPE` | Never |
//! | `IdempotencyRequired` | `IDEMPOTENCY_REQUIRED` | Never (caller-correctable) |
//! | `ConfirmationRequired` | `CONFIRMATION_REQUIRED` | Never (caller-correctable) |
//! | `Validation` | `VALIDATION_ERROR` | Never |
//! | `Upstream` | `UPSTREAM_ERROR` | Never across invocations |
//! | `Timeout` | `TIMEOUT` | Never; outcome is *unknown*, not failed |
//! | `InvalidToolName` | `INVALID_TOOL_NAME` | Registration-time only |
//! | `DuplicateTool` | `DUPLICATE_TOOL` | Registration-time only |
//! | `AdapterRegistration` | `ADAPTER_REGISTRATION` | Registration-time only |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::execution::fallback::UpstreamFailure;

/// Gateway-level errors surfaced to callers.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// No canonical id or alias matched the requested tool id.
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// The owning adapter is a mock entry or failed registration.
    #[error("Adapter '{0}' is not executable")]
    AdapterNotExecutable(String),

    /// No adapter is registered under the requested id.
    #[error("Adapter not found: {0}")]
    AdapterNotFound(String),

    /// Caller scopes are not a superset of the tool's required scopes.
    #[error("Insufficient scope: missing {}", missing.join(", "))]
    InsufficientScope {
        /// Scopes the caller lacks.
        missing: Vec<String>,
    },

    /// The tool requires an idempotency key and none was supplied.
    #[error("Tool '{tool}' requires an idempotency key")]
    IdempotencyRequired { tool: String },

    /// The tool requires explicit confirmation and none was supplied.
    #[error("Tool '{tool}' requires explicit confirmation")]
    ConfirmationRequired { tool: String },

    /// Parameters failed schema validation.
    #[error("Invalid parameters at '{field}': {message}")]
    Validation { field: String, message: String },

    /// The final adapter/backend failure after exhausting fallback candidates.
    #[error("Upstream failure: {0}")]
    Upstream(UpstreamFailure),

    /// The adapter call exceeded the caller's deadline. Outcome is unknown:
    /// the call may have succeeded upstream after the gateway gave up.
    #[error("Tool '{tool}' timed out after {elapsed_ms}ms (outcome unknown)")]
    Timeout { tool: String, elapsed_ms: u64 },

    /// A tool name mixed separator conventions at registration time.
    #[error("Invalid tool name '{name}' in adapter '{adapter}': {reason}")]
    InvalidToolName {
        adapter: String,
        name: String,
        reason: String,
    },

    /// Two tools in one adapter produced the same canonical id.
    #[error("Duplicate tool id: {0}")]
    DuplicateTool(String),

    /// An adapter failed to initialize or list its tools during registration.
    #[error("Adapter '{adapter}' failed to register: {message}")]
    AdapterRegistration { adapter: String, message: String },
}

impl GatewayError {
    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::ToolNotFound(_) => "TOOL_NOT_FOUND",
            GatewayError::AdapterNotExecutable(_) => "ADAPTER_NOT_EXECUTABLE",
            GatewayError::AdapterNotFound(_) => "ADAPTER_NOT_FOUND",
            GatewayError::InsufficientScope { .. } => "INSUFFICIENT_SCOPE",
            GatewayError::IdempotencyRequired { .. } => "IDEMPOTENCY_REQUIRED",
            GatewayError::ConfirmationRequired { .. } => "CONFIRMATION_REQUIRED",
            GatewayError::Validation { .. } => "VALIDATION_ERROR",
            GatewayError::Upstream(_) => "UPSTREAM_ERROR",
            GatewayError::Timeout { .. } => "TIMEOUT",
            GatewayError::InvalidToolName { .. } => "INVALID_TOOL_NAME",
            GatewayError::DuplicateTool(_) => "DUPLICATE_TOOL",
            GatewayError::AdapterRegistration { .. } => "ADAPTER_REGISTRATION",
        }
    }

    /// Exact remediation for caller-correctable policy failures.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            GatewayError::IdempotencyRequired { .. } => {
                Some("add options.idempotency_key with a unique value".to_string())
            }
            GatewayError::ConfirmationRequired { .. } => {
                Some("set options.confirmed = true to acknowledge the risk".to_string())
            }
            GatewayError::InsufficientScope { missing } => Some(format!(
                "request a credential carrying the missing scopes: {}",
                missing.join(", ")
            )),
            _ => None,
        }
    }

    /// Whether a caller must treat the outcome as unknown rather than failed.
    pub fn is_unknown_outcome(&self) -> bool {
        matches!(self, GatewayError::Timeout { .. })
    }
}

/// Serializable error surface returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable error code (e.g. "CONFIRMATION_REQUIRED").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Exact remediation, present for policy errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl From<&GatewayError> for ErrorBody {
    fn from(err: &GatewayError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            suggestion: err.suggestion(),
        }
    }
}
