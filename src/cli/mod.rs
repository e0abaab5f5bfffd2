//! CLI module
//!
//! Command-line interface for generating annotated schemas.
//!
//! # Commands
//!
//! - `generate` - Build the schema for a sample document
//! - `fields` - List the document's fields and their controls
//! - `formats` - List legal formats per type
//! - `detect` - Print the detected kind of a document

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
