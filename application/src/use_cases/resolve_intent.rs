//! Resolve Intent use case: natural-language query to ranked tool ids.
//!
//! Scoring is pure and lives in the domain layer; this use case supplies
//! the search space (the full registry catalog, mocks included) and the
//! configured result limit.

use std::sync::Arc;

use tracing::debug;

use toolgate_domain::{IntentQuery, IntentResult};

use crate::config::ExecutionParams;
use crate::ports::tool_router::ToolRouterPort;

pub struct ResolveIntentUseCase<R: ToolRouterPort> {
    router: Arc<R>,
    params: ExecutionParams,
}

impl<R: ToolRouterPort> ResolveIntentUseCase<R> {
    pub fn new(router: Arc<R>) -> Self {
        Self { router, params: ExecutionParams::default() }
    }

    pub fn with_params(mut self, params: ExecutionParams) -> Self {
        self.params = params;
        self
    }

    /// Rank catalog tools against the query. Identical inputs over an
    /// unchanged catalog give identical output.
    pub fn resolve(&self, mut query: IntentQuery) -> IntentResult {
        if query.limit.is_none() {
            query.limit = Some(self.params.intent_limit);
        }
        let catalog = self.router.catalog();
        let result = toolgate_domain::intent::scoring::resolve(&catalog, &query);
        debug!(
            query = %query.query,
            recommended = result.recommended.as_ref().map(|r| r.tool_id.as_str()),
            alternatives = result.alternatives.len(),
            "Resolved intent"
        );
        result
    }
}
