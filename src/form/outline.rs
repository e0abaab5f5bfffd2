//! Outline generation

use super::types::{FieldControl, FieldRow};
use crate::annotations::formats_for;
use crate::schema::{detect_type, JsonType};
use crate::types::{FieldPath, JsonObject};
use serde_json::Value;

/// List every field of `document` in pre-order
///
/// Only non-null, non-array objects become groups; a non-object root has
/// no fields.
pub fn outline(document: &Value) -> Vec<FieldRow> {
    let mut rows = Vec::new();
    if let Value::Object(map) = document {
        collect(map, &FieldPath::root(), 0, &mut rows);
    }
    rows
}

fn collect(map: &JsonObject, prefix: &FieldPath, depth: usize, rows: &mut Vec<FieldRow>) {
    for (key, value) in map {
        let path = prefix.child(key);
        let control = match value {
            Value::Object(nested) => FieldControl::Group {
                has_children: !nested.is_empty(),
            },
            _ => FieldControl::Leaf {
                default_type: JsonType::String,
                formats: formats_for(JsonType::String),
            },
        };

        rows.push(FieldRow {
            path: path.clone(),
            key: key.clone(),
            depth,
            kind: detect_type(value),
            control,
        });

        if let Value::Object(nested) = value {
            collect(nested, &path, depth + 1, rows);
        }
    }
}

/// Render rows as an indented text tree, one field per line
pub fn render_outline(rows: &[FieldRow]) -> String {
    rows.iter()
        .map(|row| {
            let indent = "  ".repeat(row.depth);
            let marker = if row.is_group() { "+" } else { "-" };
            format!("{indent}{marker} {} ({}) [{}]\n", row.key, row.kind, row.path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_outline_pre_order() {
        let doc = json!({"name": "Ada", "address": {"city": "London", "geo": {"lat": 51.5}}, "age": 36});
        let rows = outline(&doc);

        let paths: Vec<_> = rows.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["name", "address", "address.city", "address.geo", "address.geo.lat", "age"]
        );
        let depths: Vec<_> = rows.iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![0, 0, 1, 1, 2, 0]);
    }

    #[test]
    fn test_outline_controls() {
        let doc = json!({"meta": {}, "tags": ["a"], "gone": null, "n": 1});
        let rows = outline(&doc);

        assert_eq!(rows[0].control, FieldControl::Group { has_children: false });
        assert!(!rows[1].is_group());
        assert_eq!(rows[1].kind, JsonType::Array);
        assert!(!rows[2].is_group());
        assert_eq!(rows[2].kind, JsonType::Null);
        assert_eq!(
            rows[3].control,
            FieldControl::Leaf {
                default_type: JsonType::String,
                formats: formats_for(JsonType::String),
            }
        );
        assert_eq!(rows[3].kind, JsonType::Number);
    }

    #[test]
    fn test_outline_non_object_root() {
        assert!(outline(&json!([{"a": 1}])).is_empty());
        assert!(outline(&json!(42)).is_empty());
    }

    #[test]
    fn test_render_outline() {
        let rows = outline(&json!({"a": {"b": true}}));
        assert_eq!(render_outline(&rows), "+ a (object) [a]\n  - b (boolean) [a.b]\n");
    }

    #[test]
    fn test_row_serializes_flat() {
        let rows = outline(&json!({"a": {"b": 1}}));
        assert_eq!(
            serde_json::to_value(&rows[0]).unwrap(),
            json!({"path": "a", "key": "a", "depth": 0, "kind": "object", "control": "group", "has_children": true})
        );
    }
}
