//! Immutable registry snapshot.
//!
//! All catalog reads and identifier resolution run against one snapshot,
//! so a reader never observes a half-applied reload. Both resolution
//! branches (canonical index, alias table) are plain hash lookups.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use toolgate_domain::{Adapter, AdapterRecord, RegisteredTool};

/// One adapter in the snapshot: its catalog record plus the runtime
/// handle when the adapter is executable.
#[derive(Clone)]
pub struct AdapterEntry {
    pub record: AdapterRecord,
    /// `None` for mock and unavailable adapters.
    pub runtime: Option<Arc<dyn Adapter>>,
}

/// Immutable view of everything registered at one point in time.
#[derive(Clone, Default)]
pub struct RegistrySnapshot {
    /// Adapter id -> entry. BTreeMap keeps listings deterministic.
    pub(crate) adapters: BTreeMap<String, AdapterEntry>,
    /// Canonical tool id -> registered tool.
    pub(crate) tools: HashMap<String, RegisteredTool>,
    /// snake_case alias -> canonical id.
    pub(crate) aliases: HashMap<String, String>,
}

impl RegistrySnapshot {
    /// Resolve a canonical or aliased id. Canonical wins when an id is
    /// both (which registration prevents, but the order is still fixed).
    pub fn resolve(&self, tool_id: &str) -> Option<&RegisteredTool> {
        self.tools.get(tool_id).or_else(|| {
            self.aliases
                .get(tool_id)
                .and_then(|canonical| self.tools.get(canonical))
        })
    }

    pub fn adapter(&self, adapter_id: &str) -> Option<&AdapterEntry> {
        self.adapters.get(adapter_id)
    }

    pub fn adapters(&self) -> impl Iterator<Item = &AdapterEntry> {
        self.adapters.values()
    }

    /// Tools of one adapter, sorted by canonical id.
    pub fn tools_of(&self, adapter_id: &str) -> Vec<RegisteredTool> {
        let mut tools: Vec<RegisteredTool> = self
            .tools
            .values()
            .filter(|tool| tool.adapter_id == adapter_id)
            .cloned()
            .collect();
        tools.sort_by(|a, b| a.canonical_id.cmp(&b.canonical_id));
        tools
    }

    /// Every registered tool, sorted by canonical id.
    pub fn catalog(&self) -> Vec<RegisteredTool> {
        let mut tools: Vec<RegisteredTool> = self.tools.values().cloned().collect();
        tools.sort_by(|a, b| a.canonical_id.cmp(&b.canonical_id));
        tools
    }

    pub fn stats(&self) -> RegistryStats {
        let mut tools_per_adapter = BTreeMap::new();
        for tool in self.tools.values() {
            *tools_per_adapter.entry(tool.adapter_id.clone()).or_insert(0) += 1;
        }
        RegistryStats {
            total_adapters: self.adapters.len(),
            executable_adapters: self
                .adapters
                .values()
                .filter(|entry| entry.record.executable())
                .count(),
            total_tools: self.tools.len(),
            total_aliases: self.aliases.len(),
            tools_per_adapter,
        }
    }
}

/// Statistics about a registry snapshot.
#[derive(Debug, Clone)]
pub struct RegistryStats {
    pub total_adapters: usize,
    pub executable_adapters: usize,
    pub total_tools: usize,
    pub total_aliases: usize,
    pub tools_per_adapter: BTreeMap<String, usize>,
}
