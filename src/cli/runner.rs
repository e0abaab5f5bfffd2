//! CLI runner - executes commands

use crate::annotations::{formats_for, load_annotations};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::error::{Error, Result, ResultExt};
use crate::form::render_outline;
use crate::schema::{detect_type, JsonType};
use crate::session::{RenderStyle, Session};
use serde_json::{json, Value};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
    config: Config,
}

impl Runner {
    /// Create a new runner, loading the config file if one was given
    pub fn new(cli: Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        Ok(Self { cli, config })
    }

    /// Create a runner with an explicit configuration
    pub fn with_config(cli: Cli, config: Config) -> Self {
        Self { cli, config }
    }

    /// Effective configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the CLI command, writing its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;

        if let Commands::Generate {
            output: Some(path), ..
        } = &self.cli.command
        {
            fs::write(path, format!("{output}\n"))
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            info!("Wrote schema to {}", path.display());
        } else {
            println!("{output}");
        }
        Ok(())
    }

    /// Run the CLI command and return its output text
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::Generate {
                input,
                annotations,
                detect_formats,
                compact,
                schema_uri,
                title,
                ..
            } => self.generate(
                input,
                annotations.as_deref(),
                *detect_formats,
                *compact,
                schema_uri.as_deref(),
                title.as_deref(),
            ),
            Commands::Fields { input } => self.fields(input),
            Commands::Formats { field_type } => self.formats(field_type.as_deref()),
            Commands::Detect { input } => self.detect(input),
        }
    }

    /// Build the schema for a document
    fn generate(
        &self,
        input: &str,
        annotations: Option<&Path>,
        detect_formats: bool,
        compact: bool,
        schema_uri: Option<&str>,
        title: Option<&str>,
    ) -> Result<String> {
        let text = read_input(input)?;

        // Flags override the config file
        let mut config = self.config.clone();
        if let Some(uri) = schema_uri {
            config.output.schema_uri = Some(uri.to_string());
        }
        if let Some(title) = title {
            config.output.title = Some(title.to_string());
        }
        let style = if compact {
            RenderStyle::Compact
        } else {
            config.render_style()
        };

        let mut session = Session::from_text_with(&text, config.schema_builder(), style)?;

        if detect_formats || config.inference.detect_formats {
            let applied = session.apply_format_hints()?;
            debug!(applied, "format hints");
        }

        if let Some(path) = annotations {
            let file = load_annotations(path)?;
            session.apply_annotations(&file)?;
            info!(fields = file.fields.len(), "applied annotations from {}", path.display());
        }

        Ok(session.rendered().to_string())
    }

    /// List the document's fields
    fn fields(&self, input: &str) -> Result<String> {
        let text = read_input(input)?;
        let session = Session::from_text(&text)?;

        match self.cli.format {
            OutputFormat::Text => Ok(render_outline(session.outline()).trim_end().to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(session.outline())?),
        }
    }

    /// List legal formats per type
    fn formats(&self, field_type: Option<&str>) -> Result<String> {
        let types: Vec<JsonType> = match field_type {
            Some(raw) => {
                let t = raw.parse::<JsonType>()?;
                if !t.is_assignable() {
                    return Err(Error::config(format!("Type '{raw}' cannot be assigned")));
                }
                vec![t]
            }
            None => JsonType::ASSIGNABLE.to_vec(),
        };

        match self.cli.format {
            OutputFormat::Text => Ok(types
                .iter()
                .map(|t| format!("{t}: {}", formats_for(*t).join(", ")))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => {
                let map: serde_json::Map<String, Value> = types
                    .iter()
                    .map(|t| (t.to_string(), json!(formats_for(*t))))
                    .collect();
                Ok(serde_json::to_string_pretty(&map)?)
            }
        }
    }

    /// Print the detected kind of a document
    fn detect(&self, input: &str) -> Result<String> {
        let text = read_input(input)?;
        let value: Value = serde_json::from_str(&text)?;
        let kind = detect_type(&value);

        match self.cli.format {
            OutputFormat::Text => Ok(kind.to_string()),
            OutputFormat::Json => Ok(json!({ "kind": kind }).to_string()),
        }
    }
}

/// Read a document from a path, or stdin for "-"
fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }

    fs::read_to_string(input).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: input.to_string(),
            }
        } else {
            Error::Io(e)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn runner(args: &[&str]) -> Runner {
        let cli = Cli::try_parse_from(args).unwrap();
        Runner::with_config(cli, Config::default())
    }

    fn write_sample(dir: &tempfile::TempDir) -> String {
        let path = dir.path().join("doc.json");
        fs::write(&path, r#"{"name": "Ada", "address": {"city": "London"}}"#).unwrap();
        path.display().to_string()
    }

    #[test]
    fn test_generate_compact() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_sample(&dir);
        let out = runner(&["schema-annotator", "generate", "-i", input.as_str(), "--compact"])
            .execute()
            .unwrap();
        assert_eq!(
            out,
            r#"{"type":"object","properties":{"name":{"type":"string"},"address":{"type":"object","properties":{"city":{"type":"string"}},"required":[]}},"required":[]}"#
        );
    }

    #[test]
    fn test_generate_with_annotations_and_title() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_sample(&dir);
        let annotations = dir.path().join("ann.yaml");
        fs::write(&annotations, "fields:\n  address.city:\n    required: true\n").unwrap();

        let out = runner(&[
            "schema-annotator",
            "generate",
            "-i",
            input.as_str(),
            "-a",
            annotations.to_str().unwrap(),
            "--title",
            "Person",
        ])
        .execute()
        .unwrap();

        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["title"], "Person");
        assert_eq!(value["properties"]["address"]["required"], json!(["city"]));
    }

    #[test]
    fn test_generate_missing_input() {
        let err = runner(&["schema-annotator", "generate", "-i", "/nonexistent/doc.json"])
            .execute()
            .unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_fields_text() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_sample(&dir);
        let out = runner(&["schema-annotator", "fields", "-i", input.as_str()]).execute().unwrap();
        assert_eq!(
            out,
            "- name (string) [name]\n+ address (object) [address]\n  - city (string) [address.city]"
        );
    }

    #[test]
    fn test_formats_single_type() {
        let out = runner(&["schema-annotator", "formats", "integer"]).execute().unwrap();
        assert_eq!(out, "integer: none, int32, int64");

        assert!(runner(&["schema-annotator", "formats", "array"]).execute().is_err());
    }

    #[test]
    fn test_formats_json() {
        let out = runner(&["schema-annotator", "--format", "json", "formats"])
            .execute()
            .unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["boolean"], json!(["none"]));
        assert_eq!(value.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_detect() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.json");
        fs::write(&path, "[1, 2]").unwrap();
        let out = runner(&["schema-annotator", "detect", "-i", path.to_str().unwrap()])
            .execute()
            .unwrap();
        assert_eq!(out, "array");
    }
}
