//! Fallback-eligibility classification.
//!
//! An adapter may try an ordered list of backend candidates (a fallback
//! chain) for one logical operation. Whether a failure permits trying the
//! next candidate is a pure rule over the failure itself, so the policy is
//! unit-testable without any network call.
//!
//! Eligible ("this backend doesn't recognize this request"):
//! - HTTP 404
//! - HTTP 400 whose message reads as "not found" / "unknown action" /
//!   "invalid action"
//! - a network-level failure with no status code whose message reads as
//!   "not found" / "function missing"
//!
//! Not eligible (stop immediately, surface the error):
//! - auth failures (401/403): an alternate backend cannot fix the caller
//! - server-side failures (5xx): retrying elsewhere may mask an incident
//! - anything else

use serde::{Deserialize, Serialize};

/// A failure reported by a backend call.
///
/// `status` is the HTTP status code when one was received; `None` means the
/// failure happened below the protocol (connect error, DNS, reset).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamFailure {
    /// HTTP status code, if the backend responded at all.
    pub status: Option<u16>,
    /// Backend-provided or transport-provided failure message.
    pub message: String,
}

impl UpstreamFailure {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    /// Failure with an HTTP status code.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::new(Some(status), message)
    }

    /// Network-level failure with no status code.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(None, message)
    }
}

impl std::fmt::Display for UpstreamFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "HTTP {}: {}", status, self.message),
            None => write!(f, "network error: {}", self.message),
        }
    }
}

/// Message fragments that signal "this backend doesn't know this operation".
const UNRECOGNIZED_FRAGMENTS: [&str; 4] =
    ["not found", "unknown action", "invalid action", "function missing"];

fn message_signals_unrecognized(message: &str) -> bool {
    let lowered = message.to_lowercase();
    UNRECOGNIZED_FRAGMENTS.iter().any(|fragment| lowered.contains(fragment))
}

/// Whether the next candidate in a fallback chain may be attempted.
pub fn is_fallback_eligible(failure: &UpstreamFailure) -> bool {
    match failure.status {
        Some(404) => true,
        Some(400) => message_signals_unrecognized(&failure.message),
        Some(401) | Some(403) => false,
        Some(status) if status >= 500 => false,
        Some(_) => false,
        None => message_signals_unrecognized(&failure.message),
    }
}
