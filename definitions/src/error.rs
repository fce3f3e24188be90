//! Error types for definition loading and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading definitions or configuration.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A definition document parsed but is unusable.
    #[error("invalid definition {file}: {message}")]
    InvalidDefinition { file: String, message: String },

    /// The definition directory held no usable documents.
    #[error("no definitions found in {}", .0.display())]
    NoDefinitions(PathBuf),
}

/// Convenience alias for results with [`DefinitionError`].
pub type Result<T> = std::result::Result<T, DefinitionError>;
