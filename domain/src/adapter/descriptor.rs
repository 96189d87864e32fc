//! Adapter descriptors and registration status.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identity and capabilities of one backend integration.
///
/// Created when an adapter is registered and immutable afterwards; the
/// registry destroys it on unregistration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterDescriptor {
    /// Unique adapter id (kebab-case, e.g. "paystack").
    pub id: String,
    /// Human-readable name for catalogs.
    pub display_name: String,
    /// Capability markers (e.g. "payments", "refunds").
    #[serde(default)]
    pub capabilities: BTreeSet<String>,
    /// Catalog category (e.g. "payment-provider").
    pub category: String,
}

impl AdapterDescriptor {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            capabilities: BTreeSet::new(),
            category: category.into(),
        }
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.insert(capability.into());
        self
    }

    pub fn with_capabilities(
        mut self,
        capabilities: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.capabilities
            .extend(capabilities.into_iter().map(Into::into));
        self
    }
}

/// How the registry ended up holding an adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "status")]
pub enum AdapterStatus {
    /// Registered and dispatchable.
    Ready,
    /// Catalog-only placeholder; execution is rejected.
    Mock,
    /// Registration failed; listed so catalogs stay complete.
    Unavailable { reason: String },
}

impl AdapterStatus {
    /// Whether the execution engine may dispatch to this adapter.
    pub fn is_executable(&self) -> bool {
        matches!(self, AdapterStatus::Ready)
    }
}

/// Catalog view of one adapter: descriptor plus registration status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterRecord {
    pub descriptor: AdapterDescriptor,
    pub status: AdapterStatus,
}

impl AdapterRecord {
    pub fn new(descriptor: AdapterDescriptor, status: AdapterStatus) -> Self {
        Self { descriptor, status }
    }

    /// Marker used by catalog views (`executable: false` for mocks and
    /// unavailable adapters).
    pub fn executable(&self) -> bool {
        self.status.is_executable()
    }
}
