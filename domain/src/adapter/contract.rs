//! The adapter contract.
//!
//! This module defines the [`Adapter`] trait, the one fixed interface every
//! backend integration implements. Vendor integrations vary wildly in
//! auth, payload shapes, and failure modes, so
//! the registry and the execution engine never branch on a concrete adapter:
//! they see `initialize` / `list_tools` / `call_tool` / `health_check` and
//! nothing else.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ToolRegistry                           │
//! │   (canonical index + alias table, resolves tool ids)        │
//! └─────────────────────────────────────────────────────────────┘
//!           │               │                │
//!           ▼               ▼                ▼
//!    ┌───────────┐   ┌────────────┐   ┌────────────┐
//!    │  Payment  │   │  Document  │   │  Internal  │
//!    │  Adapter  │   │  Adapter   │   │  Adapter   │
//!    └───────────┘   └────────────┘   └────────────┘
//! ```
//!
//! An adapter owns its tool list and its own dispatch logic, including any
//! internal fallback chain across multiple physical backends. Fallback
//! candidates are tried strictly in the adapter's declared order, never
//! raced: side-effecting calls must not reach two backends concurrently.

use async_trait::async_trait;
use thiserror::Error;

use super::descriptor::AdapterDescriptor;
use super::health::HealthStatus;
use crate::execution::context::CallContext;
use crate::execution::fallback::UpstreamFailure;
use crate::tool::descriptor::ToolDescriptor;

/// Errors an adapter can raise during registration.
#[derive(Debug, Clone, Error)]
pub enum AdapterError {
    /// `initialize` failed (connectivity check, credential probe).
    /// Often transient; registration of other adapters must continue.
    #[error("Initialization failed: {0}")]
    Initialize(String),

    /// `list_tools` failed to produce the tool list.
    #[error("Tool discovery failed: {0}")]
    Discovery(String),
}

/// A pluggable integration exposing one backend family's operations as tools.
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Identity and capabilities of this adapter.
    fn descriptor(&self) -> &AdapterDescriptor;

    /// Prepare the adapter for use. May perform network calls (connectivity
    /// checks); the registry calls this once before listing tools.
    async fn initialize(&self) -> Result<(), AdapterError>;

    /// The tools this adapter exposes. Names must be unique within the
    /// adapter and follow the single-separator convention.
    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, AdapterError>;

    /// Execute one tool. `name` is the adapter-local tool name (not the
    /// canonical id). The adapter honors `ctx` cancellation on its own
    /// outbound calls, best-effort.
    async fn call_tool(
        &self,
        name: &str,
        params: &serde_json::Value,
        ctx: &CallContext,
    ) -> Result<serde_json::Value, UpstreamFailure>;

    /// Liveness of the adapter's backend(s).
    async fn health_check(&self) -> HealthStatus;
}
