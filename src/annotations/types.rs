//! Annotation table types

use super::enums::parse_enum_values;
use super::formats::{is_valid_format, NO_FORMAT};
use crate::error::{Error, Result};
use crate::schema::JsonType;
use crate::types::FieldPath;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type, format and enum overrides for one field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldAnnotation {
    /// Explicit type replacing the detected kind
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<JsonType>,

    /// Format; absent means none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Allowed literals; never stored empty
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
}

impl FieldAnnotation {
    /// Whether this annotation overrides nothing
    pub fn is_empty(&self) -> bool {
        self.field_type.is_none()
            && self.format.is_none()
            && self.enum_values.is_none()
    }
}

/// Per-path overrides for one document
///
/// Field overrides are kept in the order their path was first annotated;
/// required paths are kept in the order they were marked. A table belongs
/// to a single document; build a new one when the document changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationTable {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    fields: IndexMap<FieldPath, FieldAnnotation>,

    #[serde(default, skip_serializing_if = "IndexSet::is_empty")]
    required: IndexSet<FieldPath>,
}

impl AnnotationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of annotated paths
    pub fn len(&self) -> usize {
        let required_only = self
            .required
            .iter()
            .filter(|p| !self.fields.contains_key(*p))
            .count();
        self.fields.len() + required_only
    }

    /// Whether no path is annotated
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.required.is_empty()
    }

    /// Type, format and enum overrides for a path
    pub fn get(&self, path: &str) -> Option<&FieldAnnotation> {
        self.fields.get(path)
    }

    /// Paths marked required, in the order they were marked
    pub fn required_paths(&self) -> impl Iterator<Item = &FieldPath> {
        self.required.iter()
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Whether the path is marked required
    pub fn is_required(&self, path: &str) -> bool {
        self.required.contains(path)
    }

    /// Explicit type for the path
    pub fn type_of(&self, path: &str) -> Option<JsonType> {
        self.get(path).and_then(|a| a.field_type)
    }

    /// Format for the path
    pub fn format_of(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(|a| a.format.as_deref())
    }

    /// Enum literals for the path
    pub fn enum_of(&self, path: &str) -> Option<&[Value]> {
        self.get(path).and_then(|a| a.enum_values.as_deref())
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Mark or unmark the path as required
    ///
    /// Marking an already required path keeps its original position.
    pub fn set_required(&mut self, path: &str, required: bool) {
        if required {
            self.required.insert(FieldPath::from(path));
        } else {
            self.required.shift_remove(path);
        }
        tracing::debug!(path, required, "set required");
    }

    /// Override the type of the path
    ///
    /// Resets the format to none: legal formats depend on the type.
    pub fn set_type(&mut self, path: &str, field_type: JsonType) -> Result<()> {
        if !field_type.is_assignable() {
            return Err(Error::unsupported_type(path, field_type.as_str()));
        }

        let annotation = self.entry(path);
        annotation.field_type = Some(field_type);
        annotation.format = None;
        tracing::debug!(path, field_type = %field_type, "set type");
        Ok(())
    }

    /// Set the format of the path; `none` or empty clears it
    ///
    /// Without an explicit type the field offers the string formats.
    pub fn set_format(&mut self, path: &str, format: &str) -> Result<()> {
        let format = format.trim();
        if format.is_empty() || format == NO_FORMAT {
            if let Some(annotation) = self.fields.get_mut(path) {
                annotation.format = None;
                self.prune(path);
            }
            tracing::debug!(path, "cleared format");
            return Ok(());
        }

        let field_type = self.type_of(path).unwrap_or(JsonType::String);
        if !is_valid_format(field_type, format) {
            return Err(Error::invalid_format(path, format, field_type.as_str()));
        }

        self.entry(path).format = Some(format.to_string());
        tracing::debug!(path, format, "set format");
        Ok(())
    }

    /// Set the enum of the path from comma-separated text
    ///
    /// Literals are coerced by the path's explicit type. Text that yields
    /// no literal removes the enum.
    pub fn set_enum(&mut self, path: &str, text: &str) {
        let values = parse_enum_values(text, self.type_of(path));
        self.set_enum_values(path, values);
    }

    /// Set already-typed enum literals; an empty list removes the enum
    pub fn set_enum_values(&mut self, path: &str, values: Vec<Value>) {
        if values.is_empty() {
            if let Some(annotation) = self.fields.get_mut(path) {
                annotation.enum_values = None;
                self.prune(path);
            }
            tracing::debug!(path, "cleared enum");
        } else {
            tracing::debug!(path, count = values.len(), "set enum");
            self.entry(path).enum_values = Some(values);
        }
    }

    fn entry(&mut self, path: &str) -> &mut FieldAnnotation {
        self.fields.entry(FieldPath::from(path)).or_default()
    }

    fn prune(&mut self, path: &str) {
        if self.get(path).is_some_and(FieldAnnotation::is_empty) {
            self.fields.shift_remove(path);
        }
    }
}
