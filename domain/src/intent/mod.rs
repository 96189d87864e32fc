//! Intent domain: free-text goal → ranked tool recommendation.

pub mod query;
pub mod scoring;

pub use query::{
    IntentQuery, IntentResult, ParameterHint, RankedCandidate, ToolRecommendation,
    DEFAULT_INTENT_LIMIT,
};
pub use scoring::{rank, resolve, ScoredTool, AMBIGUITY_MARGIN, CONFIDENCE_THRESHOLD};
