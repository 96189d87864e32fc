//! Parameter validation implementations.

pub mod schema;

pub use schema::JsonSchemaValidator;
