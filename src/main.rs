//! schema-annotator CLI
//!
//! Command-line interface for generating annotated JSON Schemas

use clap::Parser;
use schema_annotator::cli::{Cli, Runner};
use schema_annotator::types::LogLevel;

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let runner = match Runner::new(cli) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Initialize logging
    let level = if verbose {
        LogLevel::Debug
    } else {
        runner.config().log_level
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::from(level).into()),
        )
        .init();

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
