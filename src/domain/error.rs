use std::io;

use thiserror::Error;

/// Library-wide error type for path resolution.
///
/// Every failure is local and synchronous; a failing stage aborts the whole
/// path-generation call and no partial result is ever returned.
#[derive(Debug, Error)]
pub enum PathError {
    /// Underlying I/O failure while reading a configuration document.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration document could not be parsed.
    #[error("Failed to parse project configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Configuration failed pre-flight validation.
    #[error("Invalid project configuration:\n  - {}", .0.join("\n  - "))]
    ConfigValidation(Vec<String>),

    /// Task references a different project than the loaded configuration.
    #[error("Task project '{task}' does not match loaded configuration '{config}'")]
    ProjectMismatch { task: String, config: String },

    /// A name-cleaning rule is unusable (bad pattern or capture reference).
    #[error("Invalid name rule for '{field}': {reason}")]
    InvalidNameRule { field: String, reason: String },

    /// Version value cannot be represented with the configured padding.
    #[error("Invalid version '{value}': {reason}")]
    InvalidVersion { value: String, reason: String },

    /// No root mapping exists for the requested platform.
    #[error("Unsupported platform '{0}': no root mapping configured")]
    UnsupportedPlatform(String),

    /// No filename pattern exists for the requested file type.
    #[error("Unknown file type '{file_type}'. Configured types: {available}")]
    UnknownFileType { file_type: String, available: String },

    /// A template placeholder had no value in the variable context.
    #[error("Unresolved variable '{{{name}}}' in {context}")]
    UnresolvedVariable { name: String, context: String },

    /// Result serialization failed.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PathError {
    pub fn invalid_version<S: Into<String>, R: Into<String>>(value: S, reason: R) -> Self {
        PathError::InvalidVersion { value: value.into(), reason: reason.into() }
    }

    pub fn invalid_name_rule<S: Into<String>, R: Into<String>>(field: S, reason: R) -> Self {
        PathError::InvalidNameRule { field: field.into(), reason: reason.into() }
    }
}
