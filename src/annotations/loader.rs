//! Annotation file loader
//!
//! Reads annotations from YAML (or JSON, which YAML accepts) files:
//!
//! ```yaml
//! fields:
//!   name:
//!     required: true
//!   age:
//!     type: integer
//!     format: int32
//!     enum: "18, 21, 65"
//!   address.city:
//!     enum: [London, Paris]
//! ```

use super::enums::coerce_literal;
use super::types::AnnotationTable;
use crate::error::{Error, Result};
use crate::schema::JsonType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parsed annotation file, not yet validated against a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationFile {
    /// Field path → annotations, applied in file order
    #[serde(default)]
    pub fields: IndexMap<String, FieldSpec>,
}

/// Annotations for one field as written in the file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    #[serde(default)]
    pub required: bool,

    #[serde(rename = "type", default)]
    pub field_type: Option<String>,

    #[serde(default)]
    pub format: Option<String>,

    #[serde(rename = "enum", default)]
    pub enum_values: Option<EnumSpec>,
}

/// Enum written either as comma text or as a list of scalars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumSpec {
    Text(String),
    List(Vec<Value>),
}

/// Load an annotation file from disk
pub fn load_annotations(path: impl AsRef<Path>) -> Result<AnnotationFile> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read annotation file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_annotations_from_str(&content)
}

/// Load an annotation file from a YAML or JSON string
pub fn load_annotations_from_str(text: &str) -> Result<AnnotationFile> {
    if text.trim().is_empty() {
        return Ok(AnnotationFile::default());
    }
    let file: AnnotationFile = serde_yaml::from_str(text)?;
    Ok(file)
}

impl AnnotationFile {
    /// Apply every field spec to `table` through the regular mutation rules
    ///
    /// Order per field: type, format, enum, required; a type given in the
    /// file therefore governs the format check and enum coercion.
    /// `is_known` rejects paths that are not fields of the document.
    pub fn apply_to(
        &self,
        table: &mut AnnotationTable,
        is_known: impl Fn(&str) -> bool,
    ) -> Result<()> {
        for (path, spec) in &self.fields {
            if !is_known(path) {
                return Err(Error::unknown_field(path));
            }

            if let Some(raw) = &spec.field_type {
                let field_type = raw
                    .parse::<JsonType>()
                    .map_err(|_| Error::unsupported_type(path, raw))?;
                table.set_type(path, field_type)?;
            }

            if let Some(format) = &spec.format {
                table.set_format(path, format)?;
            }

            match &spec.enum_values {
                Some(EnumSpec::Text(text)) => table.set_enum(path, text),
                Some(EnumSpec::List(items)) => {
                    let values = coerce_list(path, items, table.type_of(path))?;
                    table.set_enum_values(path, values);
                }
                None => {}
            }

            if spec.required {
                table.set_required(path, true);
            }
        }

        tracing::debug!(fields = self.fields.len(), "applied annotation file");
        Ok(())
    }
}

/// Coerce string items like typed text; other scalars pass through
fn coerce_list(path: &str, items: &[Value], field_type: Option<JsonType>) -> Result<Vec<Value>> {
    items
        .iter()
        .filter(|item| !matches!(item, Value::String(s) if s.trim().is_empty()))
        .map(|item| match item {
            Value::String(s) => Ok(coerce_literal(s.trim(), field_type)),
            Value::Number(_) | Value::Bool(_) => Ok(item.clone()),
            Value::Null | Value::Array(_) | Value::Object(_) => Err(Error::annotation(
                path,
                format!("enum literals must be scalars, got {item}"),
            )),
        })
        .collect()
}
