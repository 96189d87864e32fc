//! Schema validator port.
//!
//! The execution engine validates params against a tool's input schema in
//! strict mode (unknown fields rejected) before dispatch. The JSON Schema
//! implementation lives in the infrastructure layer.

use serde::{Deserialize, Serialize};

/// A single validation failure with the offending field path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Path of the offending field (e.g. `/amount`), or `/` for the root.
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Port for strict params-vs-schema validation.
pub trait SchemaValidatorPort: Send + Sync {
    fn validate(
        &self,
        params: &serde_json::Value,
        schema: &serde_json::Value,
    ) -> Result<(), ValidationIssue>;
}

/// Validator that accepts everything. Default when no validator is wired;
/// production wiring installs the JSON Schema validator.
#[derive(Debug, Clone, Default)]
pub struct AcceptAllValidator;

impl SchemaValidatorPort for AcceptAllValidator {
    fn validate(
        &self,
        _params: &serde_json::Value,
        _schema: &serde_json::Value,
    ) -> Result<(), ValidationIssue> {
        Ok(())
    }
}
