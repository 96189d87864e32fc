//! Tool descriptors and the deny-by-default execution policy.
//!
//! A [`ToolDescriptor`] is populated by an adapter during `initialize` and is
//! read-only thereafter from the registry's perspective. Risk and scope
//! metadata are optional on the descriptor, but never optional at execution
//! time: [`ToolDescriptor::effective_policy`] resolves missing metadata to
//! the most restrictive interpretation, so an under-specified tool can never
//! be read as "no restrictions".

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Risk level of a tool operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Read-only operations (e.g. list transactions).
    Low,
    /// State-changing but reversible operations.
    Medium,
    /// Financially or externally significant operations.
    High,
    /// Irreversible operations (e.g. bulk delete).
    Destructive,
}

impl RiskLevel {
    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Destructive => "destructive",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Description of one named, schema-described operation exposed by an adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Tool name, unique within its adapter (single separator convention).
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Discovery tags (e.g. "payments", "card").
    #[serde(default)]
    pub tags: Vec<String>,
    /// JSON Schema for the tool's parameters.
    pub input_schema: serde_json::Value,
    /// Declared risk level. `None` means the adapter did not classify the
    /// tool; execution treats that as high risk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    /// Whether calls must carry an idempotency key.
    #[serde(default)]
    pub idempotency_required: bool,
    /// Whether calls must carry an explicit confirmation.
    #[serde(default)]
    pub confirmation_required: bool,
    /// Scopes a caller must hold. `None` means the adapter declared nothing;
    /// combined with a missing risk level this denies by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_scopes: Option<BTreeSet<String>>,
}

impl ToolDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            tags: Vec::new(),
            input_schema: serde_json::json!({ "type": "object" }),
            risk_level: None,
            idempotency_required: false,
            confirmation_required: false,
            required_scopes: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_input_schema(mut self, schema: serde_json::Value) -> Self {
        self.input_schema = schema;
        self
    }

    pub fn with_risk_level(mut self, risk: RiskLevel) -> Self {
        self.risk_level = Some(risk);
        self
    }

    pub fn with_idempotency_required(mut self, required: bool) -> Self {
        self.idempotency_required = required;
        self
    }

    pub fn with_confirmation_required(mut self, required: bool) -> Self {
        self.confirmation_required = required;
        self
    }

    pub fn with_required_scopes(
        mut self,
        scopes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.required_scopes = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    /// Whether the descriptor declares neither risk nor scope metadata.
    pub fn is_unclassified(&self) -> bool {
        self.risk_level.is_none() && self.required_scopes.is_none()
    }

    /// Resolve the policy the execution engine must enforce.
    ///
    /// Missing metadata resolves restrictively:
    /// - no risk and no scopes at all → high risk, confirmation required,
    ///   and the [`ExecutionPolicy::ADMIN_SCOPE`] tier;
    /// - a missing risk level alone → high risk;
    /// - missing scopes with a declared risk level → no scope requirement
    ///   (the adapter classified the tool and opted out of scoping).
    pub fn effective_policy(&self) -> ExecutionPolicy {
        if self.is_unclassified() {
            return ExecutionPolicy {
                risk_level: RiskLevel::High,
                idempotency_required: self.idempotency_required,
                confirmation_required: true,
                required_scopes: BTreeSet::from([ExecutionPolicy::ADMIN_SCOPE.to_string()]),
            };
        }
        ExecutionPolicy {
            risk_level: self.risk_level.unwrap_or(RiskLevel::High),
            idempotency_required: self.idempotency_required,
            confirmation_required: self.confirmation_required || self.risk_level.is_none(),
            required_scopes: self.required_scopes.clone().unwrap_or_default(),
        }
    }
}

/// The policy actually enforced for one tool call.
///
/// Unlike [`ToolDescriptor`], every field here is resolved: there is no
/// "unspecified" state left by the time the pipeline runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPolicy {
    pub risk_level: RiskLevel,
    pub idempotency_required: bool,
    pub confirmation_required: bool,
    pub required_scopes: BTreeSet<String>,
}

impl ExecutionPolicy {
    /// Scope tier required when a tool carries no scope metadata at all.
    pub const ADMIN_SCOPE: &'static str = "admin";

    /// Scopes in `required` that `held` does not cover.
    pub fn missing_scopes(&self, held: &BTreeSet<String>) -> Vec<String> {
        self.required_scopes
            .iter()
            .filter(|scope| !held.contains(*scope))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::High < RiskLevel::Destructive);
    }

    #[test]
    fn test_descriptor_builder() {
        let tool = ToolDescriptor::new("initiate-transfer", "Send money to a recipient")
            .with_tags(["payments", "transfer"])
            .with_risk_level(RiskLevel::High)
            .with_idempotency_required(true)
            .with_confirmation_required(true)
            .with_required_scopes(["payments:write"]);

        assert_eq!(tool.name, "initiate-transfer");
        assert_eq!(tool.tags.len(), 2);
        assert!(tool.idempotency_required);
        assert!(!tool.is_unclassified());
    }

    #[test]
    fn test_unclassified_tool_denies_by_default() {
        let tool = ToolDescriptor::new("mystery-op", "No metadata declared");
        assert!(tool.is_unclassified());

        let policy = tool.effective_policy();
        assert_eq!(policy.risk_level, RiskLevel::High);
        assert!(policy.confirmation_required);
        assert!(policy.required_scopes.contains(ExecutionPolicy::ADMIN_SCOPE));
    }

    #[test]
    fn test_missing_risk_alone_is_high_with_confirmation() {
        let tool = ToolDescriptor::new("scoped-op", "Scopes declared, risk missing")
            .with_required_scopes(["documents:write"]);

        let policy = tool.effective_policy();
        assert_eq!(policy.risk_level, RiskLevel::High);
        assert!(policy.confirmation_required);
        assert!(policy.required_scopes.contains("documents:write"));
        assert!(!policy.required_scopes.contains(ExecutionPolicy::ADMIN_SCOPE));
    }

    #[test]
    fn test_classified_tool_keeps_declared_policy() {
        let tool = ToolDescriptor::new("list-transactions", "Read-only listing")
            .with_risk_level(RiskLevel::Low);

        let policy = tool.effective_policy();
        assert_eq!(policy.risk_level, RiskLevel::Low);
        assert!(!policy.confirmation_required);
        assert!(policy.required_scopes.is_empty());
    }

    #[test]
    fn test_missing_scopes() {
        let tool = ToolDescriptor::new("initiate-transfer", "Transfer")
            .with_risk_level(RiskLevel::High)
            .with_required_scopes(["payments:write", "payments:read"]);

        let held = BTreeSet::from(["payments:read".to_string()]);
        let missing = tool.effective_policy().missing_scopes(&held);
        assert_eq!(missing, vec!["payments:write".to_string()]);
    }

    #[test]
    fn test_descriptor_serde_round_trip() {
        let tool = ToolDescriptor::new("verify", "Verify a transaction")
            .with_risk_level(RiskLevel::Low)
            .with_input_schema(json!({
                "type": "object",
                "properties": { "reference": { "type": "string" } },
                "required": ["reference"]
            }));

        let encoded = serde_json::to_string(&tool).unwrap();
        let decoded: ToolDescriptor = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.name, "verify");
        assert_eq!(decoded.risk_level, Some(RiskLevel::Low));
    }
}
