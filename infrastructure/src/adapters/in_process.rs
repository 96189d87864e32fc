//! In-process backend: tools implemented as Rust closures.
//!
//! Used for built-in tools and in tests. A handler missing for a
//! requested tool reports a status-less "function missing" failure,
//! which the fallback rule treats as eligible, matching the behavior of
//! an HTTP endpoint that does not know the tool.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use toolgate_domain::{CallContext, UpstreamFailure};

use super::backend::ToolBackend;

type Handler =
    Arc<dyn Fn(&serde_json::Value) -> Result<serde_json::Value, UpstreamFailure> + Send + Sync>;

pub struct InProcessBackend {
    id: String,
    handlers: HashMap<String, Handler>,
}

impl InProcessBackend {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), handlers: HashMap::new() }
    }

    pub fn with_handler<F>(mut self, tool: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&serde_json::Value) -> Result<serde_json::Value, UpstreamFailure>
            + Send
            + Sync
            + 'static,
    {
        self.handlers.insert(tool.into(), Arc::new(handler));
        self
    }
}

#[async_trait]
impl ToolBackend for InProcessBackend {
    fn id(&self) -> &str {
        &self.id
    }

    async fn invoke(
        &self,
        tool: &str,
        params: &serde_json::Value,
        _ctx: &CallContext,
    ) -> Result<serde_json::Value, UpstreamFailure> {
        match self.handlers.get(tool) {
            Some(handler) => handler(params),
            None => Err(UpstreamFailure::new(None, format!("function missing: {tool}"))),
        }
    }
}
