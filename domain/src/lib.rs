//! Domain layer for toolgate
//!
//! This crate contains the core types and rules of the tool-routing gateway.
//! It has no dependencies on infrastructure or transport concerns.
//!
//! # Core Concepts
//!
//! ## Canonical identifiers
//!
//! Every tool lives under exactly one canonical id (`adapter:tool`,
//! kebab-case) plus at most one derived snake_case alias. Lookups always
//! normalize to canonical before policy or audit logic runs.
//!
//! ## Deny-by-default
//!
//! A tool descriptor missing risk/scope metadata resolves to the most
//! restrictive policy (high risk, confirmation required, admin scope);
//! missing metadata is never read as "no restrictions".
//!
//! ## Fallback chains
//!
//! An adapter may try an ordered list of backend candidates; whether a
//! failure permits trying the next candidate is the pure rule in
//! [`execution::fallback`], independent of any network call.

pub mod adapter;
pub mod audit;
pub mod core;
pub mod execution;
pub mod intent;
pub mod tool;

// Re-export commonly used types
pub use adapter::{
    contract::{Adapter, AdapterError},
    descriptor::{AdapterDescriptor, AdapterRecord, AdapterStatus},
    health::HealthStatus,
};
pub use audit::{params_hash, AuditEntry, AuditOutcome};
pub use core::error::{ErrorBody, GatewayError};
pub use execution::{
    context::CallContext,
    fallback::{is_fallback_eligible, UpstreamFailure},
    request::{CallerContext, ExecutionOptions, ExecutionRequest},
    result::{ExecutionMeta, ExecutionResult},
};
pub use intent::{
    query::{
        IntentQuery, IntentResult, ParameterHint, RankedCandidate, ToolRecommendation,
        DEFAULT_INTENT_LIMIT,
    },
    scoring::{AMBIGUITY_MARGIN, CONFIDENCE_THRESHOLD},
};
pub use tool::{
    descriptor::{ExecutionPolicy, RiskLevel, ToolDescriptor},
    identifier,
    registered::RegisteredTool,
};
