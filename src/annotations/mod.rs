//! Annotation module
//!
//! User overrides keyed by field path.
//!
//! # Overview
//!
//! The annotation module provides:
//! - `AnnotationTable` - Type, format and enum per path, plus required paths in marking order
//! - Enum text coercion by field type
//! - The legal format catalogue and format hints for sample strings
//! - YAML/JSON annotation file loading

mod enums;
mod formats;
mod loader;
mod types;

pub use enums::{coerce_literal, parse_enum_values};
pub use formats::{formats_for, is_valid_format, suggest_format, NO_FORMAT};
pub use loader::{load_annotations, load_annotations_from_str, AnnotationFile, EnumSpec, FieldSpec};
pub use types::{AnnotationTable, FieldAnnotation};
