//! Audit sink implementations.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::info;

use toolgate_application::ports::audit_sink::{AuditSinkError, AuditSinkPort};
use toolgate_domain::{AuditEntry, AuditOutcome};

/// Emits audit entries as structured log events under the
/// `toolgate::audit` target.
#[derive(Debug, Clone, Default)]
pub struct TracingAuditSink;

#[async_trait]
impl AuditSinkPort for TracingAuditSink {
    async fn record(&self, entry: AuditEntry) -> Result<(), AuditSinkError> {
        let outcome = match &entry.outcome {
            AuditOutcome::Success => "success".to_string(),
            AuditOutcome::Failure { code } => format!("failure:{code}"),
        };
        info!(
            target: "toolgate::audit",
            request_id = %entry.request_id,
            tool = %entry.tool_id,
            actor = %entry.actor_id,
            params_hash = %entry.params_hash,
            timestamp = %entry.timestamp.to_rfc3339(),
            outcome = %outcome,
            "Tool execution audited"
        );
        Ok(())
    }
}

/// Buffers audit entries in memory. For tests and local inspection.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    entries: Mutex<Vec<AuditEntry>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AuditSinkPort for MemoryAuditSink {
    async fn record(&self, entry: AuditEntry) -> Result<(), AuditSinkError> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_memory_sink_collects_entries() {
        let sink = MemoryAuditSink::new();
        sink.record(AuditEntry::new(
            "req-1",
            "paystack:verify",
            "agent-7",
            &json!({ "reference": "tx-1" }),
            AuditOutcome::Success,
        ))
        .await
        .unwrap();

        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].tool_id, "paystack:verify");
    }

    #[tokio::test]
    async fn test_tracing_sink_never_fails() {
        let sink = TracingAuditSink;
        let result = sink
            .record(AuditEntry::new(
                "req-1",
                "paystack:verify",
                "agent-7",
                &json!({}),
                AuditOutcome::Failure { code: "TIMEOUT".into() },
            ))
            .await;
        assert!(result.is_ok());
    }
}
