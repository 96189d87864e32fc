//! Execute Tool use case: the policy pipeline in front of every dispatch.
//!
//! This is the single authorized entry point for running a tool. The
//! pipeline runs in a fixed order, each stage short-circuiting with a
//! structured error:
//!
//! ```text
//! 1. resolution      → TOOL_NOT_FOUND / ADAPTER_NOT_EXECUTABLE
//! 2. authorization   → INSUFFICIENT_SCOPE
//! 3. idempotency     → IDEMPOTENCY_REQUIRED
//! 4. confirmation    → CONFIRMATION_REQUIRED
//! 5. schema          → VALIDATION_ERROR
//! 6. dispatch        → UPSTREAM_ERROR / TIMEOUT
//! 7. audit emission  (fire-and-forget, never fails the caller)
//! ```
//!
//! `elapsed_ms` spans stages 1–6; audit emission is spawned and excluded
//! from latency accounting. A `TIMEOUT` means *unknown outcome*: the
//! adapter call may have succeeded upstream after the gateway gave up, so
//! the in-flight call is cancelled best-effort via the call context's
//! cancellation token.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use uuid::Uuid;

use toolgate_domain::{
    AuditEntry, AuditOutcome, CallContext, ExecutionMeta, ExecutionRequest, ExecutionResult,
    GatewayError, RegisteredTool,
};

use crate::config::ExecutionParams;
use crate::ports::audit_sink::{AuditSinkPort, NoAuditSink};
use crate::ports::schema_validator::{AcceptAllValidator, SchemaValidatorPort};
use crate::ports::tool_router::ToolRouterPort;

/// Use case enforcing the policy pipeline before any adapter code runs.
pub struct ExecuteToolUseCase<R: ToolRouterPort> {
    router: Arc<R>,
    validator: Arc<dyn SchemaValidatorPort>,
    audit: Arc<dyn AuditSinkPort>,
    params: ExecutionParams,
}

impl<R: ToolRouterPort + 'static> ExecuteToolUseCase<R> {
    pub fn new(router: Arc<R>) -> Self {
        Self {
            router,
            validator: Arc::new(AcceptAllValidator),
            audit: Arc::new(NoAuditSink),
            params: ExecutionParams::default(),
        }
    }

    pub fn with_validator(mut self, validator: Arc<dyn SchemaValidatorPort>) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_audit_sink(mut self, audit: Arc<dyn AuditSinkPort>) -> Self {
        self.audit = audit;
        self
    }

    pub fn with_params(mut self, params: ExecutionParams) -> Self {
        self.params = params;
        self
    }

    /// Run one tool call through the full pipeline.
    ///
    /// Always returns an [`ExecutionResult`]; failures are structured
    /// errors in the result, never panics.
    pub async fn execute(&self, request: ExecutionRequest) -> ExecutionResult {
        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();

        // Stage 1: resolution. Unknown ids are always rejected; there is no
        // implicit creation or silent no-op.
        let resolved = match self.router.resolve(&request.tool_id) {
            Ok(tool) => tool,
            Err(err) => return self.finish(&request, &request_id, started, None, Err(err)).await,
        };
        if !resolved.executable {
            let err = GatewayError::AdapterNotExecutable(resolved.adapter_id.clone());
            return self
                .finish(&request, &request_id, started, Some(&resolved), Err(err))
                .await;
        }

        let policy = resolved.descriptor.effective_policy();
        debug!(
            tool = %resolved.canonical_id,
            risk = %policy.risk_level,
            actor = %request.caller.actor_id,
            "Resolved tool call"
        );

        // Stage 2: authorization.
        let missing = policy.missing_scopes(&request.caller.scopes);
        if !missing.is_empty() {
            let err = GatewayError::InsufficientScope { missing };
            return self
                .finish(&request, &request_id, started, Some(&resolved), Err(err))
                .await;
        }

        // Stage 3: idempotency.
        if policy.idempotency_required && request.options.idempotency_key.is_none() {
            let err = GatewayError::IdempotencyRequired { tool: resolved.canonical_id.clone() };
            return self
                .finish(&request, &request_id, started, Some(&resolved), Err(err))
                .await;
        }

        // Stage 4: confirmation.
        if policy.confirmation_required && !request.options.is_confirmed() {
            let err = GatewayError::ConfirmationRequired { tool: resolved.canonical_id.clone() };
            return self
                .finish(&request, &request_id, started, Some(&resolved), Err(err))
                .await;
        }

        // Stage 5: schema validation, strict mode.
        if let Err(issue) = self
            .validator
            .validate(&request.params, &resolved.descriptor.input_schema)
        {
            let err = GatewayError::Validation { field: issue.field, message: issue.message };
            return self
                .finish(&request, &request_id, started, Some(&resolved), Err(err))
                .await;
        }

        // Stage 6: dispatch, bounded by the caller's deadline.
        let token = CancellationToken::new();
        let ctx = CallContext::new(&request_id, &request.caller.actor_id)
            .with_scopes(request.caller.scopes.iter().cloned())
            .with_cancellation(token.clone());

        let deadline = request
            .options
            .timeout_ms
            .map(Duration::from_millis)
            .or(self.params.default_timeout);

        let dispatch = self.router.dispatch(&resolved, &request.params, &ctx);
        let outcome = match deadline {
            Some(limit) => match tokio::time::timeout(limit, dispatch).await {
                Ok(result) => result,
                Err(_) => {
                    token.cancel();
                    Err(GatewayError::Timeout {
                        tool: resolved.canonical_id.clone(),
                        elapsed_ms: started.elapsed().as_millis() as u64,
                    })
                }
            },
            None => dispatch.await,
        };

        self.finish(&request, &request_id, started, Some(&resolved), outcome)
            .await
    }

    /// Stage 7: build the result and emit the audit entry.
    async fn finish(
        &self,
        request: &ExecutionRequest,
        request_id: &str,
        started: Instant,
        resolved: Option<&RegisteredTool>,
        outcome: Result<serde_json::Value, GatewayError>,
    ) -> ExecutionResult {
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let mut meta = ExecutionMeta::new(request_id, elapsed_ms);
        if let Some(tool) = resolved {
            meta = meta.with_tool(
                tool.adapter_id.clone(),
                tool.descriptor.name.clone(),
                tool.descriptor.effective_policy().risk_level,
            );
        }

        let audit_tool_id = resolved
            .map(|tool| tool.canonical_id.clone())
            .unwrap_or_else(|| request.tool_id.clone());
        let audit_outcome = match &outcome {
            Ok(_) => AuditOutcome::Success,
            Err(err) => AuditOutcome::Failure { code: err.code().to_string() },
        };
        let entry = AuditEntry::new(
            request_id,
            audit_tool_id,
            request.caller.actor_id.clone(),
            &request.params,
            audit_outcome,
        );

        // Fire-and-forget: a sink failure is logged, never surfaced.
        let sink = Arc::clone(&self.audit);
        tokio::spawn(async move {
            if let Err(err) = sink.record(entry).await {
                warn!(error = %err, "Audit sink rejected entry");
            }
        });

        match outcome {
            Ok(data) => ExecutionResult::ok(data, meta),
            Err(err) => {
                debug!(code = err.code(), tool = %request.tool_id, "Execution failed");
                ExecutionResult::err(&err, meta)
            }
        }
    }
}
