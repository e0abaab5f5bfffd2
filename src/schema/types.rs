//! Schema types

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// JSON Schema type
///
/// `Array` and `Null` only ever come from detection; a user can assign
/// every other variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
}

impl JsonType {
    /// Types a user may pick for a field
    pub const ASSIGNABLE: [JsonType; 5] = [
        JsonType::String,
        JsonType::Number,
        JsonType::Integer,
        JsonType::Boolean,
        JsonType::Object,
    ];

    /// Lowercase schema keyword for this type
    pub fn as_str(self) -> &'static str {
        match self {
            JsonType::String => "string",
            JsonType::Number => "number",
            JsonType::Integer => "integer",
            JsonType::Boolean => "boolean",
            JsonType::Object => "object",
            JsonType::Array => "array",
            JsonType::Null => "null",
        }
    }

    /// Whether a user may assign this type as an override
    pub fn is_assignable(self) -> bool {
        Self::ASSIGNABLE.contains(&self)
    }

    /// Whether enum literals for this type are numeric
    pub fn is_numeric(self) -> bool {
        matches!(self, JsonType::Number | JsonType::Integer)
    }
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JsonType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" => Ok(JsonType::String),
            "number" => Ok(JsonType::Number),
            "integer" => Ok(JsonType::Integer),
            "boolean" => Ok(JsonType::Boolean),
            "object" => Ok(JsonType::Object),
            "array" => Ok(JsonType::Array),
            "null" => Ok(JsonType::Null),
            other => Err(Error::Other(format!("Unknown schema type: {other}"))),
        }
    }
}

/// Schema fragment for one field
///
/// `properties` and `required` are present only on fields the builder
/// recursed into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaProperty {
    /// Effective type (override or detected kind)
    #[serde(rename = "type")]
    pub json_type: JsonType,

    /// Format hint (e.g., "date-time", "int32")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Allowed literal values, in entry order
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<serde_json::Value>>,

    /// Nested properties (for objects)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaProperty>>,

    /// Required keys of the nested properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl SchemaProperty {
    /// Create a new leaf property with the given type
    pub fn new(json_type: JsonType) -> Self {
        Self {
            json_type,
            format: None,
            enum_values: None,
            properties: None,
            required: None,
        }
    }

    /// Set format hint
    #[must_use]
    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    /// Get a nested property
    pub fn get_property(&self, name: &str) -> Option<&SchemaProperty> {
        self.properties.as_ref().and_then(|p| p.get(name))
    }

    /// Check if a nested property is required
    pub fn is_required(&self, name: &str) -> bool {
        self.required
            .as_ref()
            .is_some_and(|r| r.iter().any(|n| n == name))
    }
}

/// Full JSON Schema document; the root is always an object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Schema version URI
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Schema title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Schema type (always "object" for top-level)
    #[serde(rename = "type")]
    pub json_type: JsonType,

    /// Object properties, in input key order
    #[serde(default)]
    pub properties: IndexMap<String, SchemaProperty>,

    /// Required properties
    #[serde(default)]
    pub required: Vec<String>,
}

impl Default for JsonSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonSchema {
    /// Create a new empty schema
    pub fn new() -> Self {
        Self {
            schema: None,
            title: None,
            json_type: JsonType::Object,
            properties: IndexMap::new(),
            required: Vec::new(),
        }
    }

    /// Get a property
    pub fn get_property(&self, name: &str) -> Option<&SchemaProperty> {
        self.properties.get(name)
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Convert to pretty JSON string (two-space indent)
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Convert to single-line JSON string
    pub fn to_json_compact(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
