// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # schema-annotator
//!
//! Infer a JSON Schema from a sample JSON document, then refine each field
//! with user annotations: explicit type, format, enum values and the
//! required flag.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use schema_annotator::{session::Session, schema::JsonType, Result};
//!
//! fn main() -> Result<()> {
//!     let mut session = Session::from_text(r#"{"name": "Ada", "age": 36}"#)?;
//!     session.set_required("name", true)?;
//!     session.set_type("age", JsonType::Integer)?;
//!     session.set_format("age", "int32")?;
//!     println!("{}", session.rendered());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌───────────────┐   ┌──────────────────┐
//! │ JSON text    │──▶│ Session       │──▶│ Schema text      │
//! └──────────────┘   │  outline      │   └──────────────────┘
//!                    │  annotations  │
//!                    └───────┬───────┘
//!                            │ every mutation
//!                    ┌───────▼───────┐
//!                    │ SchemaBuilder │ detect_type + overrides
//!                    └───────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Kind detection and schema construction
pub mod schema;

/// Per-field user overrides
pub mod annotations;

/// Field outline of a sample document
pub mod form;

/// Editing session over one document
pub mod session;

/// Run configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use annotations::AnnotationTable;
pub use schema::{build_schema, detect_type, JsonSchema, JsonType, SchemaBuilder};
pub use session::Session;
