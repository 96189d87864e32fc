//! Execution parameters: engine-level defaults.
//!
//! [`ExecutionParams`] groups the static parameters the execution engine and
//! intent resolver fall back to when a request does not override them.
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use toolgate_domain::DEFAULT_INTENT_LIMIT;

/// Engine defaults applied when a request leaves an option unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Deadline for the adapter dispatch stage when the caller supplies no
    /// `timeout_ms`. `None` disables the default deadline entirely.
    pub default_timeout: Option<Duration>,
    /// Default number of intent alternatives.
    pub intent_limit: usize,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            default_timeout: Some(Duration::from_secs(30)),
            intent_limit: DEFAULT_INTENT_LIMIT,
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_default_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn with_intent_limit(mut self, limit: usize) -> Self {
        self.intent_limit = limit;
        self
    }
}
