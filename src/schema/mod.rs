//! Schema construction module
//!
//! Turns a sample JSON document plus an annotation table into a JSON Schema.
//!
//! # Features
//!
//! - **Kind Detection**: Classifies any JSON value as object, array, string, number, boolean or null
//! - **Overrides**: Explicit type, format and enum annotations replace inferred values
//! - **Required Tracking**: Required keys are listed on their immediate parent node
//! - **Nested Object Support**: Recurses into object-typed fields with their own path prefix

mod builder;
mod detect;
mod types;

pub use builder::{build_schema, SchemaBuilder};
pub use detect::detect_type;
pub use types::{JsonSchema, JsonType, SchemaProperty};
