//! Config error types.

use crate::validation::DefinitionIssue;
use thiserror::Error;

/// Errors that can occur while loading or saving definitions
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read '{path}': {reason}")]
    Io { path: String, reason: String },

    /// The document is not a well-formed definition
    #[error("Failed to parse {format} definition: {reason}")]
    Parse { format: &'static str, reason: String },

    /// The file extension names no supported format
    #[error("Unsupported definition format '{extension}', expected yaml, yml or json")]
    UnsupportedFormat { extension: String },

    /// Serialization to YAML or JSON failed
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// The definition parsed but failed validation
    #[error("Definition is invalid: {}", summarize(.0))]
    Invalid(Vec<DefinitionIssue>),
}

fn summarize(issues: &[DefinitionIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
