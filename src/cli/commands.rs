//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Infer a JSON Schema from a sample document and apply field annotations
#[derive(Parser, Debug)]
#[command(name = "schema-annotator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for listings
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the schema for a sample document
    Generate {
        /// Sample JSON document ("-" reads stdin)
        #[arg(short, long)]
        input: String,

        /// Annotation file (YAML or JSON)
        #[arg(short, long)]
        annotations: Option<PathBuf>,

        /// Seed formats for string fields from their sample values
        #[arg(long)]
        detect_formats: bool,

        /// Single-line output
        #[arg(long)]
        compact: bool,

        /// `$schema` URI for the root
        #[arg(long)]
        schema_uri: Option<String>,

        /// Title for the root
        #[arg(long)]
        title: Option<String>,

        /// Write the schema here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the document's fields
    Fields {
        /// Sample JSON document ("-" reads stdin)
        #[arg(short, long)]
        input: String,
    },

    /// List legal formats per type
    Formats {
        /// Only this type
        #[arg(value_name = "TYPE")]
        field_type: Option<String>,
    },

    /// Print the detected kind of a document
    Detect {
        /// Sample JSON document ("-" reads stdin)
        #[arg(short, long)]
        input: String,
    },
}

/// Output format for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON
    Json,
}
