//! Field outline types

use crate::schema::JsonType;
use crate::types::FieldPath;
use serde::Serialize;

/// Controls a field offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum FieldControl {
    /// Nested object: required checkbox only, children follow
    Group {
        /// Expandable (has at least one child)
        has_children: bool,
    },
    /// Required checkbox, type, format and enum controls
    Leaf {
        /// Type preselected in the type control
        default_type: JsonType,
        /// Formats offered for the preselected type
        formats: &'static [&'static str],
    },
}

/// One field of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRow {
    pub path: FieldPath,
    pub key: String,
    /// Nesting level, 0 for top-level keys
    pub depth: usize,
    /// Detected kind of the sample value
    pub kind: JsonType,
    #[serde(flatten)]
    pub control: FieldControl,
}

impl FieldRow {
    /// Whether this row groups nested fields
    pub fn is_group(&self) -> bool {
        matches!(self.control, FieldControl::Group { .. })
    }
}
