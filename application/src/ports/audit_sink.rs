//! Audit sink port.

use async_trait::async_trait;
use thiserror::Error;

use toolgate_domain::AuditEntry;

/// Error recording an audit entry. Logged by the engine, never propagated
/// to the caller.
#[derive(Debug, Clone, Error)]
#[error("Audit sink failure: {0}")]
pub struct AuditSinkError(pub String);

/// Fire-and-forget destination for audit entries.
#[async_trait]
pub trait AuditSinkPort: Send + Sync {
    async fn record(&self, entry: AuditEntry) -> Result<(), AuditSinkError>;
}

/// Sink that discards every entry. Default when no sink is wired.
#[derive(Debug, Clone, Default)]
pub struct NoAuditSink;

#[async_trait]
impl AuditSinkPort for NoAuditSink {
    async fn record(&self, _entry: AuditEntry) -> Result<(), AuditSinkError> {
        Ok(())
    }
}
