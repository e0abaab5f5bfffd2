//! Run configuration
//!
//! Optional YAML file controlling output shape, inference extras and
//! logging. Every field has a default, so an empty file is valid.
//!
//! ```yaml
//! output:
//!   pretty: true
//!   schema_uri: "http://json-schema.org/draft-07/schema#"
//!   title: Person
//! inference:
//!   detect_formats: true
//! log_level: DEBUG
//! ```

use crate::error::{Error, Result};
use crate::schema::SchemaBuilder;
use crate::session::RenderStyle;
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete run configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Schema output options
    #[serde(default)]
    pub output: OutputConfig,

    /// Inference options
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Default log level (RUST_LOG still wins)
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Schema builder honoring the output options
    pub fn schema_builder(&self) -> SchemaBuilder {
        let mut builder = SchemaBuilder::new();
        if let Some(uri) = &self.output.schema_uri {
            builder = builder.with_schema_uri(uri.clone());
        }
        if let Some(title) = &self.output.title {
            builder = builder.with_title(title.clone());
        }
        builder
    }

    /// Text rendering style
    pub fn render_style(&self) -> RenderStyle {
        if self.output.pretty {
            RenderStyle::Pretty
        } else {
            RenderStyle::Compact
        }
    }
}

// ============================================================================
// Output
// ============================================================================

/// Schema output options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Two-space indented output
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// `$schema` URI on the root
    #[serde(default)]
    pub schema_uri: Option<String>,

    /// `title` on the root
    #[serde(default)]
    pub title: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            schema_uri: None,
            title: None,
        }
    }
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Inference
// ============================================================================

/// Inference options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InferenceConfig {
    /// Seed formats for string fields from their sample values
    #[serde(default)]
    pub detect_formats: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.output.pretty);
        assert!(config.output.schema_uri.is_none());
        assert!(!config.inference.detect_formats);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.render_style(), RenderStyle::Pretty);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_yaml_str(
            r#"
output:
  pretty: false
  schema_uri: "http://json-schema.org/draft-07/schema#"
  title: Person
inference:
  detect_formats: true
log_level: DEBUG
"#,
        )
        .unwrap();

        assert_eq!(config.render_style(), RenderStyle::Compact);
        assert_eq!(config.output.title.as_deref(), Some("Person"));
        assert!(config.inference.detect_formats);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_partial_output_keeps_pretty() {
        let config = Config::from_yaml_str("output:\n  title: X\n").unwrap();
        assert!(config.output.pretty);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::from_yaml_str("outputs: {}\n").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_schema_builder_from_config() {
        let config = Config::from_yaml_str("output:\n  title: Person\n").unwrap();
        let schema = config
            .schema_builder()
            .build(&serde_json::json!({}), &crate::annotations::AnnotationTable::new());
        assert_eq!(schema.title.as_deref(), Some("Person"));
        assert!(schema.schema.is_none());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "inference:\n  detect_formats: true\n").unwrap();
        assert!(Config::from_file(&path).unwrap().inference.detect_formats);

        let missing = Config::from_file(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(missing, Error::FileNotFound { .. }));
    }
}
