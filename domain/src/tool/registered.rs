//! Resolution product: a tool as the registry knows it.

use serde::{Deserialize, Serialize};

use super::descriptor::ToolDescriptor;

/// A tool resolved from the registry's canonical index.
///
/// This is what the registry hands to the execution engine, the intent
/// resolver, and the catalog views: the canonical identity of the tool plus
/// whether the owning adapter can actually execute it (mock entries and
/// adapters that failed registration cannot).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredTool {
    /// Canonical identifier (`adapter:tool`, kebab-case).
    pub canonical_id: String,
    /// Owning adapter id.
    pub adapter_id: String,
    /// The descriptor as the adapter declared it.
    pub descriptor: ToolDescriptor,
    /// False for mock entries and unavailable adapters.
    pub executable: bool,
}

impl RegisteredTool {
    pub fn new(
        canonical_id: impl Into<String>,
        adapter_id: impl Into<String>,
        descriptor: ToolDescriptor,
        executable: bool,
    ) -> Self {
        Self {
            canonical_id: canonical_id.into(),
            adapter_id: adapter_id.into(),
            descriptor,
            executable,
        }
    }
}
