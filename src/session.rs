//! Editing session over one sample document
//!
//! A session owns a parsed document, its field outline and the annotation
//! table scoped to that document. Every mutation rebuilds and re-renders
//! the schema immediately. Replacing the document replaces the table too,
//! so annotations for paths of an older document never leak into a new one.

use crate::annotations::{suggest_format, AnnotationFile, AnnotationTable};
use crate::error::{Error, Result};
use crate::form::{outline, FieldRow};
use crate::schema::{JsonSchema, JsonType, SchemaBuilder};
use serde_json::Value;
use tracing::{debug, info};

/// How the schema text is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Two-space indented
    #[default]
    Pretty,
    /// Single line
    Compact,
}

/// One document plus its annotations and current schema
#[derive(Debug, Clone)]
pub struct Session {
    document: Value,
    rows: Vec<FieldRow>,
    annotations: AnnotationTable,
    builder: SchemaBuilder,
    style: RenderStyle,
    schema: JsonSchema,
    rendered: String,
}

impl Session {
    /// Start a session from JSON text
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_text_with(text, SchemaBuilder::new(), RenderStyle::Pretty)
    }

    /// Start a session with explicit output options
    pub fn from_text_with(text: &str, builder: SchemaBuilder, style: RenderStyle) -> Result<Self> {
        let document: Value = serde_json::from_str(text)?;
        Self::from_value_with(document, builder, style)
    }

    /// Start a session from an already parsed document
    pub fn from_value(document: Value) -> Result<Self> {
        Self::from_value_with(document, SchemaBuilder::new(), RenderStyle::Pretty)
    }

    fn from_value_with(document: Value, builder: SchemaBuilder, style: RenderStyle) -> Result<Self> {
        let rows = outline(&document);
        let annotations = seed_annotations(&rows)?;
        let mut session = Self {
            document,
            rows,
            annotations,
            builder,
            style,
            schema: JsonSchema::new(),
            rendered: String::new(),
        };
        session.refresh()?;
        info!(fields = session.rows.len(), "loaded document");
        Ok(session)
    }

    /// Replace the document with new JSON text
    ///
    /// The annotation table is rebuilt from scratch. On a parse error the
    /// session keeps its previous document, annotations and schema.
    pub fn regenerate(&mut self, text: &str) -> Result<()> {
        let document: Value = serde_json::from_str(text)?;
        let next = Self::from_value_with(document, self.builder.clone(), self.style)?;
        *self = next;
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The sample document
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Field rows of the document, pre-order
    pub fn outline(&self) -> &[FieldRow] {
        &self.rows
    }

    /// Current annotations
    pub fn annotations(&self) -> &AnnotationTable {
        &self.annotations
    }

    /// Current schema
    pub fn schema(&self) -> &JsonSchema {
        &self.schema
    }

    /// Current schema text
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// Whether `path` names a field of the document
    pub fn has_field(&self, path: &str) -> bool {
        self.row(path).is_some()
    }

    fn row(&self, path: &str) -> Option<&FieldRow> {
        self.rows.iter().find(|r| r.path.as_str() == path)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Mark or unmark a field as required
    pub fn set_required(&mut self, path: &str, required: bool) -> Result<()> {
        self.ensure_field(path)?;
        self.annotations.set_required(path, required);
        self.refresh()
    }

    /// Override a field's type; clears its format
    pub fn set_type(&mut self, path: &str, field_type: JsonType) -> Result<()> {
        self.ensure_field(path)?;
        self.annotations.set_type(path, field_type)?;
        self.refresh()
    }

    /// Set a field's format; `none` clears it
    pub fn set_format(&mut self, path: &str, format: &str) -> Result<()> {
        self.ensure_field(path)?;
        self.annotations.set_format(path, format)?;
        self.refresh()
    }

    /// Set a field's enum from comma-separated text
    pub fn set_enum(&mut self, path: &str, text: &str) -> Result<()> {
        self.ensure_field(path)?;
        self.annotations.set_enum(path, text);
        self.refresh()
    }

    /// Apply an annotation file
    ///
    /// All-or-nothing: on error no annotation of the file is kept.
    pub fn apply_annotations(&mut self, file: &AnnotationFile) -> Result<()> {
        let mut annotations = self.annotations.clone();
        file.apply_to(&mut annotations, |path| self.has_field(path))?;
        self.annotations = annotations;
        self.refresh()
    }

    /// Set a suggested format on string leaves that have neither an
    /// explicit type nor a format; returns how many were set
    pub fn apply_format_hints(&mut self) -> Result<usize> {
        let mut applied = 0;
        for row in &self.rows {
            if row.is_group() || row.kind != JsonType::String {
                continue;
            }
            let path = row.path.as_str();
            if self.annotations.type_of(path).is_some() || self.annotations.format_of(path).is_some() {
                continue;
            }
            let Some(sample) = lookup(&self.document, row.path.as_str()).and_then(Value::as_str) else {
                continue;
            };
            if let Some(format) = suggest_format(sample) {
                self.annotations.set_format(path, format)?;
                debug!(path, format, "applied format hint");
                applied += 1;
            }
        }
        self.refresh()?;
        Ok(applied)
    }

    fn ensure_field(&self, path: &str) -> Result<()> {
        if self.has_field(path) {
            Ok(())
        } else {
            Err(Error::unknown_field(path))
        }
    }

    fn refresh(&mut self) -> Result<()> {
        let schema = self.builder.build(&self.document, &self.annotations);
        let rendered = match self.style {
            RenderStyle::Pretty => schema.to_json_pretty()?,
            RenderStyle::Compact => schema.to_json_compact()?,
        };
        self.schema = schema;
        self.rendered = rendered;
        Ok(())
    }
}

/// Object rows start out typed `object`, as the form has no type control
/// for them
fn seed_annotations(rows: &[FieldRow]) -> Result<AnnotationTable> {
    let mut annotations = AnnotationTable::new();
    for row in rows.iter().filter(|r| r.is_group()) {
        annotations.set_type(row.path.as_str(), JsonType::Object)?;
    }
    Ok(annotations)
}

/// Find the value at a field path by walking the outline's traversal
///
/// Keys may themselves contain dots, so the path is matched against
/// candidate keys rather than split blindly.
fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let Value::Object(map) = value else {
        return None;
    };
    if let Some(found) = map.get(path) {
        return Some(found);
    }
    map.iter().find_map(|(key, child)| {
        path.strip_prefix(key.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
            .and_then(|rest| lookup(child, rest))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::load_annotations_from_str;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const SAMPLE: &str = r#"{"name": "Ada", "age": 36, "address": {"city": "London"}}"#;

    #[test]
    fn test_new_session_renders_immediately() {
        let session = Session::from_text(SAMPLE).unwrap();
        assert_eq!(session.outline().len(), 4);
        assert!(session.rendered().starts_with("{\n  \"type\": \"object\""));
        assert_eq!(session.annotations().type_of("address"), Some(JsonType::Object));
    }

    #[test]
    fn test_mutations_rebuild_schema() {
        let mut session = Session::from_text(SAMPLE).unwrap();
        session.set_required("name", true).unwrap();
        session.set_type("age", JsonType::Integer).unwrap();
        session.set_format("age", "int32").unwrap();

        assert_eq!(
            session.schema().to_json().unwrap(),
            json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string"},
                    "age": {"type": "integer", "format": "int32"},
                    "address": {
                        "type": "object",
                        "properties": {"city": {"type": "string"}},
                        "required": []
                    }
                },
                "required": ["name"]
            })
        );
        assert_eq!(session.rendered(), session.schema().to_json_pretty().unwrap());
    }

    #[test]
    fn test_unknown_path_rejected() {
        let mut session = Session::from_text(SAMPLE).unwrap();
        let err = session.set_required("address.zip", true).unwrap_err();
        assert!(matches!(err, Error::UnknownField { .. }));
        assert!(!session.annotations().is_required("address.zip"));
    }

    #[test]
    fn test_regenerate_resets_annotations() {
        let mut session = Session::from_text(SAMPLE).unwrap();
        session.set_required("name", true).unwrap();

        session.regenerate(r#"{"name": "Grace"}"#).unwrap();
        assert!(!session.annotations().is_required("name"));
        assert!(session.schema().required.is_empty());
    }

    #[test]
    fn test_regenerate_parse_error_keeps_state() {
        let mut session = Session::from_text(SAMPLE).unwrap();
        session.set_required("name", true).unwrap();
        let before = session.rendered().to_string();

        let err = session.regenerate("{\"name\": ").unwrap_err();
        assert!(matches!(err, Error::JsonParse(_)));
        assert_eq!(session.rendered(), before);
        assert!(session.annotations().is_required("name"));
        assert_eq!(session.outline().len(), 4);
    }

    #[test]
    fn test_malformed_text_fails() {
        assert!(matches!(
            Session::from_text("not json").unwrap_err(),
            Error::JsonParse(_)
        ));
    }

    #[test]
    fn test_null_field_stays_null_typed() {
        let session = Session::from_text(r#"{"gone": null}"#).unwrap();
        assert_eq!(
            session.schema().get_property("gone").unwrap().json_type,
            JsonType::Null
        );
    }

    #[test]
    fn test_apply_annotations_all_or_nothing() {
        let mut session = Session::from_text(SAMPLE).unwrap();
        let file =
            load_annotations_from_str("fields:\n  name:\n    required: true\n  nope:\n    required: true\n")
                .unwrap();

        assert!(session.apply_annotations(&file).is_err());
        assert!(!session.annotations().is_required("name"));

        let file = load_annotations_from_str("fields:\n  address.city:\n    required: true\n").unwrap();
        session.apply_annotations(&file).unwrap();
        assert!(session
            .schema()
            .get_property("address")
            .unwrap()
            .is_required("city"));
    }

    #[test]
    fn test_format_hints() {
        let mut session = Session::from_text(
            r#"{"id": "550e8400-e29b-41d4-a716-446655440000", "site": {"url": "https://x.dev"}, "note": "hi", "n": 1}"#,
        )
        .unwrap();
        session.set_type("note", JsonType::String).unwrap();

        let applied = session.apply_format_hints().unwrap();
        assert_eq!(applied, 2);
        assert_eq!(session.annotations().format_of("id"), Some("uuid"));
        assert_eq!(session.annotations().format_of("site.url"), Some("uri"));
        assert_eq!(session.annotations().format_of("n"), None);
    }

    #[test]
    fn test_lookup_handles_dotted_keys() {
        let doc = json!({"a.b": {"c": "x"}, "a": {"b": "y"}});
        assert_eq!(lookup(&doc, "a.b"), Some(&json!({"c": "x"})));
        assert_eq!(lookup(&doc, "a.b.c"), Some(&json!("x")));
    }

    #[test]
    fn test_compact_style() {
        let session =
            Session::from_text_with(r#"{"a": true}"#, SchemaBuilder::new(), RenderStyle::Compact).unwrap();
        assert_eq!(
            session.rendered(),
            r#"{"type":"object","properties":{"a":{"type":"boolean"}},"required":[]}"#
        );
    }
}
