//! Audit entry type and params hashing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// How an execution ended, as recorded for audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "outcome")]
pub enum AuditOutcome {
    Success,
    Failure {
        /// Stable gateway error code.
        code: String,
    },
}

/// One audit record per execution, successful or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub request_id: String,
    /// Canonical tool id when resolution succeeded, else the id as the
    /// caller supplied it.
    pub tool_id: String,
    pub actor_id: String,
    /// sha256 over the JSON-serialized parameters.
    pub params_hash: String,
    pub timestamp: DateTime<Utc>,
    pub outcome: AuditOutcome,
}

impl AuditEntry {
    pub fn new(
        request_id: impl Into<String>,
        tool_id: impl Into<String>,
        actor_id: impl Into<String>,
        params: &serde_json::Value,
        outcome: AuditOutcome,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            tool_id: tool_id.into(),
            actor_id: actor_id.into(),
            params_hash: params_hash(params),
            timestamp: Utc::now(),
            outcome,
        }
    }
}

/// sha256 hex digest of a params value.
///
/// `serde_json` maps keep sorted key order, so equal values hash equally
/// regardless of how the caller assembled them.
pub fn params_hash(params: &serde_json::Value) -> String {
    let serialized = params.to_string();
    hex::encode(Sha256::digest(serialized.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_hash_is_deterministic() {
        let a = json!({ "amount": 100, "email": "a@b.c" });
        let b = json!({ "email": "a@b.c", "amount": 100 });
        assert_eq!(params_hash(&a), params_hash(&b));
    }

    #[test]
    fn test_params_hash_distinguishes_values() {
        let a = json!({ "amount": 100 });
        let b = json!({ "amount": 101 });
        assert_ne!(params_hash(&a), params_hash(&b));
    }

    #[test]
    fn test_entry_records_outcome() {
        let entry = AuditEntry::new(
            "req-1",
            "paystack:initiate-transfer",
            "agent-7",
            &json!({ "amount": 100 }),
            AuditOutcome::Failure { code: "CONFIRMATION_REQUIRED".into() },
        );
        assert_eq!(entry.tool_id, "paystack:initiate-transfer");
        assert_eq!(entry.params_hash.len(), 64);
        assert!(matches!(entry.outcome, AuditOutcome::Failure { .. }));
    }
}
