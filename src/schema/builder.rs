//! Schema construction from a sample document and its annotations

use super::detect::detect_type;
use super::types::{JsonSchema, JsonType, SchemaProperty};
use crate::annotations::AnnotationTable;
use crate::types::{FieldPath, JsonObject};
use indexmap::IndexMap;
use serde_json::Value;

/// Schema builder with output options
///
/// The builder is a pure function of the document and the annotation
/// table: it never mutates either, and equal inputs give equal output.
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    /// `$schema` URI stamped on the root
    schema_uri: Option<String>,
    /// Title stamped on the root
    title: Option<String>,
}

impl SchemaBuilder {
    /// Create a builder that emits the bare schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `$schema` on the root
    #[must_use]
    pub fn with_schema_uri(mut self, uri: impl Into<String>) -> Self {
        self.schema_uri = Some(uri.into());
        self
    }

    /// Emit `title` on the root
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Build a schema document for `root`
    ///
    /// A non-object root yields an object schema with no properties.
    pub fn build(&self, root: &Value, annotations: &AnnotationTable) -> JsonSchema {
        let mut schema = JsonSchema::new();
        schema.schema.clone_from(&self.schema_uri);
        schema.title.clone_from(&self.title);

        if let Value::Object(map) = root {
            build_level(
                map,
                &FieldPath::root(),
                annotations,
                &mut schema.properties,
                &mut schema.required,
            );
        }

        tracing::trace!(
            properties = schema.properties.len(),
            required = schema.required.len(),
            "built schema"
        );
        schema
    }
}

/// Build a schema with default output options (convenience function)
pub fn build_schema(root: &Value, annotations: &AnnotationTable) -> JsonSchema {
    SchemaBuilder::new().build(root, annotations)
}

/// Fill `properties` and `required` for one object level, recursing into
/// fields whose effective type is `object`
fn build_level(
    data: &JsonObject,
    prefix: &FieldPath,
    annotations: &AnnotationTable,
    properties: &mut IndexMap<String, SchemaProperty>,
    required: &mut Vec<String>,
) {
    for (key, value) in data {
        let path = prefix.child(key);
        let json_type = annotations
            .type_of(path.as_str())
            .unwrap_or_else(|| detect_type(value));

        let mut property = SchemaProperty::new(json_type);

        if let Some(format) = annotations.format_of(path.as_str()) {
            if !format.is_empty() {
                property = property.with_format(format);
            }
        }

        if let Some(values) = annotations.enum_of(path.as_str()) {
            if !values.is_empty() {
                property.enum_values = Some(values.to_vec());
            }
        }

        if annotations.is_required(path.as_str()) {
            required.push(key.clone());
        }

        // Arrays and null stay leaves whatever type they were given
        if json_type == JsonType::Object {
            if let Value::Object(nested) = value {
                let mut nested_properties = IndexMap::new();
                let mut nested_required = Vec::new();
                build_level(
                    nested,
                    &path,
                    annotations,
                    &mut nested_properties,
                    &mut nested_required,
                );
                property.properties = Some(nested_properties);
                property.required = Some(nested_required);
            }
        }

        properties.insert(key.clone(), property);
    }
}
