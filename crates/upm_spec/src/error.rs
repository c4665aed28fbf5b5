//! Error types for the descriptor model.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for descriptor operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors that can occur while reading, writing, or checking descriptors.
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("Invalid descriptor format in {path}: {message}")]
    InvalidFormat { path: PathBuf, message: String },

    #[error("Unsupported form file format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
