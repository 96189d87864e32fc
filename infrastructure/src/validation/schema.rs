//! JSON Schema validation of tool parameters.
//!
//! Validation is strict: when a schema declares `properties` but does not
//! state a position on extra fields, `additionalProperties: false` is
//! assumed at every nesting level, so unknown params are rejected instead
//! of silently forwarded to the backend. A schema with no `properties`
//! declares nothing to check extras against and stays open.

use serde_json::Value;

use toolgate_application::ports::schema_validator::{SchemaValidatorPort, ValidationIssue};

pub struct JsonSchemaValidator;

/// Apply the strict default to every subschema that declares properties
/// but is silent about additional ones.
fn strict_schema(schema: &Value) -> Value {
    let mut schema = schema.clone();
    harden(&mut schema);
    schema
}

fn harden(schema: &mut Value) {
    let Some(object) = schema.as_object_mut() else {
        return;
    };
    if object.contains_key("properties") && !object.contains_key("additionalProperties") {
        object.insert("additionalProperties".to_string(), Value::Bool(false));
    }
    if let Some(properties) = object.get_mut("properties").and_then(Value::as_object_mut) {
        for subschema in properties.values_mut() {
            harden(subschema);
        }
    }
    if let Some(items) = object.get_mut("items") {
        harden(items);
    }
}

impl SchemaValidatorPort for JsonSchemaValidator {
    fn validate(&self, params: &Value, schema: &Value) -> Result<(), ValidationIssue> {
        let strict = strict_schema(schema);
        let validator = jsonschema::validator_for(&strict)
            .map_err(|err| ValidationIssue::new("/", format!("invalid input schema: {err}")))?;

        if let Some(error) = validator.iter_errors(params).next() {
            let path = error.instance_path.to_string();
            let field = if path.is_empty() { "/".to_string() } else { path };
            return Err(ValidationIssue::new(field, error.to_string()));
        }
        Ok(())
    }
}
