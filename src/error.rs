//! Error types for schema-annotator
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for schema-annotator
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("Invalid JSON data: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // Annotation Errors
    // ============================================================================
    #[error("Unknown field path: {path}")]
    UnknownField { path: String },

    #[error("Unsupported type '{value}' for field '{path}'")]
    UnsupportedType { path: String, value: String },

    #[error("Format '{format}' is not valid for {field_type} field '{path}'")]
    InvalidFormat {
        path: String,
        format: String,
        field_type: String,
    },

    #[error("Invalid annotation for '{path}': {message}")]
    Annotation { path: String, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unknown field error
    pub fn unknown_field(path: impl Into<String>) -> Self {
        Self::UnknownField { path: path.into() }
    }

    /// Create an unsupported type error
    pub fn unsupported_type(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnsupportedType {
            path: path.into(),
            value: value.into(),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(
        path: impl Into<String>,
        format: impl Into<String>,
        field_type: impl Into<String>,
    ) -> Self {
        Self::InvalidFormat {
            path: path.into(),
            format: format.into(),
            field_type: field_type.into(),
        }
    }

    /// Create an annotation error
    pub fn annotation(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Annotation {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for schema-annotator
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
