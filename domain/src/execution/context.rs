//! Per-call context handed to adapters.

use std::collections::BTreeSet;
use tokio_util::sync::CancellationToken;

/// Context travelling with one tool call into the owning adapter.
///
/// Scopes are assumed to have been verified upstream by the identity
/// gateway; the core never validates credentials itself. The cancellation
/// token is triggered when the caller's deadline expires; adapters honor
/// it on their own outbound calls, best-effort.
#[derive(Debug, Clone)]
pub struct CallContext {
    /// Gateway-assigned request id (also used in audit entries).
    pub request_id: String,
    /// The acting principal.
    pub actor_id: String,
    /// Verified scopes held by the caller.
    pub scopes: BTreeSet<String>,
    /// Cancelled when the call's deadline expires.
    pub cancellation: CancellationToken,
}

impl CallContext {
    pub fn new(request_id: impl Into<String>, actor_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            actor_id: actor_id.into(),
            scopes: BTreeSet::new(),
            cancellation: CancellationToken::new(),
        }
    }

    pub fn with_scopes(mut self, scopes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Context with placeholder identity, for tests and examples.
    pub fn for_tests() -> Self {
        Self::new("req-test", "test-actor")
    }
}
