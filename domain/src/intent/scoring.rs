//! Deterministic intent ranking.
//!
//! The resolver is a resolver, not a guesser: ranking is rule-based (no
//! learned model, no external calls), so identical inputs against an
//! unchanged catalog always produce identical results.
//!
//! Score components:
//! 1. exact match on the canonical id or declared name → 1.0;
//! 2. query-token overlap with the tool's tags ∪ description tokens,
//!    normalized by the query token count, weighted by 0.6;
//! 3. adapter scope boost of +0.2 (and strict exclusion of out-of-scope
//!    tools);
//! 4. final confidence = sum, capped at 1.0.
//!
//! A recommendation is only produced when the top score clears
//! [`CONFIDENCE_THRESHOLD`] *and* beats the runner-up by at least
//! [`AMBIGUITY_MARGIN`]; anything else asks the caller to select.

use std::collections::BTreeSet;

use super::query::{
    IntentQuery, IntentResult, ParameterHint, RankedCandidate, ToolRecommendation,
    DEFAULT_INTENT_LIMIT,
};
use crate::tool::registered::RegisteredTool;

/// Minimum confidence for an automatic recommendation.
pub const CONFIDENCE_THRESHOLD: f64 = 0.5;
/// Minimum lead over the runner-up for an automatic recommendation.
pub const AMBIGUITY_MARGIN: f64 = 0.1;
/// Maximum contribution of keyword overlap.
pub const KEYWORD_WEIGHT: f64 = 0.6;
/// Contribution of a matching adapter scope.
pub const SCOPE_BOOST: f64 = 0.2;

/// A catalog tool with its computed confidence.
#[derive(Debug, Clone)]
pub struct ScoredTool {
    pub tool: RegisteredTool,
    pub score: f64,
    pub reason: String,
}

fn tokenize(text: &str) -> BTreeSet<String> {
    text.split_whitespace()
        .map(|token| token.to_lowercase())
        .collect()
}

fn tool_token_set(tool: &RegisteredTool) -> BTreeSet<String> {
    let mut tokens: BTreeSet<String> =
        tool.descriptor.tags.iter().map(|tag| tag.to_lowercase()).collect();
    tokens.extend(tokenize(&tool.descriptor.description));
    tokens
}

fn score_tool(tool: &RegisteredTool, query: &IntentQuery, scoped: bool) -> Option<ScoredTool> {
    let trimmed = query.query.trim();
    let mut score = 0.0;
    let mut reasons: Vec<String> = Vec::new();

    if trimmed == tool.canonical_id || trimmed == tool.descriptor.name {
        score += 1.0;
        reasons.push("exact match on tool name".to_string());
    } else {
        let query_tokens = tokenize(trimmed);
        if !query_tokens.is_empty() {
            let tool_tokens = tool_token_set(tool);
            let overlap = query_tokens
                .iter()
                .filter(|token| tool_tokens.contains(*token))
                .count();
            if overlap > 0 {
                score += KEYWORD_WEIGHT * overlap as f64 / query_tokens.len() as f64;
                reasons.push(format!(
                    "matched {} of {} query tokens",
                    overlap,
                    query_tokens.len()
                ));
            }
        }
    }

    if scoped {
        score += SCOPE_BOOST;
        reasons.push("within requested adapter".to_string());
    }

    if score <= 0.0 {
        return None;
    }

    Some(ScoredTool {
        tool: tool.clone(),
        score: score.min(1.0),
        reason: reasons.join("; "),
    })
}

/// Rank the catalog against a query, best first.
///
/// Ordering is total and deterministic: descending score, then ascending
/// canonical id.
pub fn rank(catalog: &[RegisteredTool], query: &IntentQuery) -> Vec<ScoredTool> {
    let mut scored: Vec<ScoredTool> = catalog
        .iter()
        .filter(|tool| match &query.adapter_scope {
            // Scoped search is strict: out-of-scope tools are excluded.
            Some(scope) => &tool.adapter_id == scope,
            None => true,
        })
        .filter_map(|tool| score_tool(tool, query, query.adapter_scope.is_some()))
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.tool.canonical_id.cmp(&b.tool.canonical_id))
    });
    scored
}

/// Extract parameter hints from a tool's input schema.
pub fn parameter_hints(schema: &serde_json::Value) -> Vec<ParameterHint> {
    let required: BTreeSet<&str> = schema
        .get("required")
        .and_then(|r| r.as_array())
        .map(|names| names.iter().filter_map(|n| n.as_str()).collect())
        .unwrap_or_default();

    let Some(properties) = schema.get("properties").and_then(|p| p.as_object()) else {
        return Vec::new();
    };

    properties
        .iter()
        .map(|(name, prop)| ParameterHint {
            name: name.clone(),
            required: required.contains(name.as_str()),
            type_hint: prop
                .get("type")
                .and_then(|t| t.as_str())
                .map(|t| t.to_string()),
        })
        .collect()
}

fn candidate(scored: &ScoredTool) -> RankedCandidate {
    RankedCandidate {
        tool_id: scored.tool.canonical_id.clone(),
        confidence: scored.score,
        reason: scored.reason.clone(),
    }
}

/// Resolve a query into a recommendation or a selection request.
pub fn resolve(catalog: &[RegisteredTool], query: &IntentQuery) -> IntentResult {
    let ranked = rank(catalog, query);
    let limit = query.limit.unwrap_or(DEFAULT_INTENT_LIMIT).max(1);

    let Some(top) = ranked.first() else {
        return IntentResult::selection(Vec::new());
    };

    let unambiguous = match ranked.get(1) {
        Some(runner_up) => top.score - runner_up.score >= AMBIGUITY_MARGIN,
        None => true,
    };

    if top.score >= CONFIDENCE_THRESHOLD && unambiguous {
        let recommendation = ToolRecommendation {
            tool_id: top.tool.canonical_id.clone(),
            confidence: top.score,
            reason: top.reason.clone(),
            ready_to_execute: top.tool.executable,
            parameter_hints: parameter_hints(&top.tool.descriptor.input_schema),
        };
        let alternatives = ranked.iter().skip(1).take(limit).map(candidate).collect();
        IntentResult::recommendation(recommendation, alternatives)
    } else {
        IntentResult::selection(ranked.iter().take(limit).map(candidate).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::descriptor::{RiskLevel, ToolDescriptor};
    use serde_json::json;

    fn payment_catalog() -> Vec<RegisteredTool> {
        vec![
            RegisteredTool::new(
                "paystack:initialize-transaction",
                "paystack",
                ToolDescriptor::new("initialize-transaction", "Start a card payment")
                    .with_tags(["payments", "card", "nigeria"])
                    .with_risk_level(RiskLevel::Medium)
                    .with_input_schema(json!({
                        "type": "object",
                        "properties": {
                            "amount": { "type": "integer" },
                            "email": { "type": "string" }
                        },
                        "required": ["amount", "email"]
                    })),
                true,
            ),
            RegisteredTool::new(
                "paystack:initiate-transfer",
                "paystack",
                ToolDescriptor::new("initiate-transfer", "Send money to a bank account")
                    .with_tags(["payments", "transfer"])
                    .with_risk_level(RiskLevel::High),
                true,
            ),
            RegisteredTool::new(
                "flutterwave:initiate-transfer",
                "flutterwave",
                ToolDescriptor::new("initiate-transfer", "Send money to a bank account")
                    .with_tags(["payments", "transfer"])
                    .with_risk_level(RiskLevel::High),
                true,
            ),
        ]
    }

    #[test]
    fn test_exact_match_scores_full_confidence() {
        let result = resolve(&payment_catalog(), &IntentQuery::new("initialize-transaction"));
        let recommended = result.recommended.unwrap();
        assert_eq!(recommended.tool_id, "paystack:initialize-transaction");
        assert_eq!(recommended.confidence, 1.0);
        assert!(!result.needs_selection);
    }

    #[test]
    fn test_exact_match_on_canonical_id() {
        let result = resolve(
            &payment_catalog(),
            &IntentQuery::new("paystack:initialize-transaction"),
        );
        assert_eq!(
            result.recommended.unwrap().tool_id,
            "paystack:initialize-transaction"
        );
    }

    #[test]
    fn test_low_confidence_needs_selection() {
        let result = resolve(
            &payment_catalog(),
            &IntentQuery::new("do something with documents"),
        );
        assert!(result.needs_selection);
        assert!(result.recommended.is_none());
    }

    #[test]
    fn test_near_tie_needs_selection() {
        // Two adapters expose the same transfer tool with identical text, so
        // their scores tie; the resolver must not silently pick one.
        let result = resolve(&payment_catalog(), &IntentQuery::new("transfer payments money"));
        assert!(result.needs_selection);
        assert!(result.recommended.is_none());
        assert!(!result.alternatives.is_empty());
    }

    #[test]
    fn test_adapter_scope_is_strict_and_boosting() {
        let query = IntentQuery::new("transfer payments").with_adapter_scope("flutterwave");
        let ranked = rank(&payment_catalog(), &query);
        assert!(ranked.iter().all(|s| s.tool.adapter_id == "flutterwave"));
        // keyword 0.6 (2/2 tokens) + scope boost 0.2
        assert!((ranked[0].score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_scoped_resolution_recommends() {
        let query = IntentQuery::new("transfer payments money").with_adapter_scope("paystack");
        let result = resolve(&payment_catalog(), &query);
        assert_eq!(result.recommended.unwrap().tool_id, "paystack:initiate-transfer");
    }

    #[test]
    fn test_determinism() {
        let query = IntentQuery::new("payments transfer");
        let first = rank(&payment_catalog(), &query);
        let second = rank(&payment_catalog(), &query);
        let ids_first: Vec<_> = first.iter().map(|s| s.tool.canonical_id.clone()).collect();
        let ids_second: Vec<_> = second.iter().map(|s| s.tool.canonical_id.clone()).collect();
        assert_eq!(ids_first, ids_second);
    }

    #[test]
    fn test_limit_caps_alternatives() {
        let query = IntentQuery::new("payments").with_limit(1);
        let result = resolve(&payment_catalog(), &query);
        assert!(result.needs_selection);
        assert_eq!(result.alternatives.len(), 1);
    }

    #[test]
    fn test_parameter_hints_from_schema() {
        let result = resolve(&payment_catalog(), &IntentQuery::new("initialize-transaction"));
        let hints = result.recommended.unwrap().parameter_hints;
        assert_eq!(hints.len(), 2);
        let amount = hints.iter().find(|h| h.name == "amount").unwrap();
        assert!(amount.required);
        assert_eq!(amount.type_hint.as_deref(), Some("integer"));
    }

    #[test]
    fn test_empty_catalog() {
        let result = resolve(&[], &IntentQuery::new("anything"));
        assert!(result.needs_selection);
        assert!(result.alternatives.is_empty());
    }
}
