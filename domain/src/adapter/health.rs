//! Adapter health reporting.

use serde::{Deserialize, Serialize};

/// Result of an adapter's health check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub healthy: bool,
    pub message: String,
}

impl HealthStatus {
    pub fn healthy(message: impl Into<String>) -> Self {
        Self { healthy: true, message: message.into() }
    }

    pub fn unhealthy(message: impl Into<String>) -> Self {
        Self { healthy: false, message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status() {
        assert!(HealthStatus::healthy("ok").healthy);
        assert!(!HealthStatus::unhealthy("connect refused").healthy);
    }
}
