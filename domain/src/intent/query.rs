//! Intent query and result types.

use serde::{Deserialize, Serialize};

/// Default number of alternatives returned when no confident
/// recommendation exists.
pub const DEFAULT_INTENT_LIMIT: usize = 3;

/// A free-text goal to resolve into a tool recommendation.
///
/// Transient: computed on demand, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentQuery {
    pub query: String,
    /// Strict scope: when set, tools from other adapters are excluded
    /// entirely (not merely de-prioritized).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adapter_scope: Option<String>,
    /// Opaque caller context, carried but not interpreted by the scorer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
    /// Cap on returned alternatives; [`DEFAULT_INTENT_LIMIT`] when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl IntentQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            adapter_scope: None,
            context: None,
            limit: None,
        }
    }

    pub fn with_adapter_scope(mut self, adapter_id: impl Into<String>) -> Self {
        self.adapter_scope = Some(adapter_id.into());
        self
    }

    pub fn with_context(mut self, context: serde_json::Value) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Hint for one parameter, drawn from a tool's input schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterHint {
    pub name: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_hint: Option<String>,
}

/// A ranked candidate without execution hints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub tool_id: String,
    pub confidence: f64,
    pub reason: String,
}

/// A confident recommendation, ready to hand to the execution engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRecommendation {
    pub tool_id: String,
    pub confidence: f64,
    pub reason: String,
    /// False when the owning adapter is a mock or unavailable.
    pub ready_to_execute: bool,
    /// Parameter hints drawn from the tool's input schema.
    pub parameter_hints: Vec<ParameterHint>,
}

/// Outcome of intent resolution.
///
/// Either a confident, unambiguous recommendation or an explicit request for
/// the caller to select among alternatives. The resolver never silently
/// picks among near-tied or low-confidence candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended: Option<ToolRecommendation>,
    pub alternatives: Vec<RankedCandidate>,
    pub needs_selection: bool,
}

impl IntentResult {
    /// Result requiring caller selection.
    pub fn selection(alternatives: Vec<RankedCandidate>) -> Self {
        Self { recommended: None, alternatives, needs_selection: true }
    }

    /// Result with a confident recommendation.
    pub fn recommendation(
        recommended: ToolRecommendation,
        alternatives: Vec<RankedCandidate>,
    ) -> Self {
        Self { recommended: Some(recommended), alternatives, needs_selection: false }
    }
}
