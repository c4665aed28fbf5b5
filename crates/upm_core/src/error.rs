//! Error types for the core module.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while assembling or creating a package.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Required fields cannot be empty: {}", fields.join(", "))]
    MissingRequiredField { fields: Vec<String> },

    #[error("Package already exists at path: {0}")]
    PackageAlreadyExists(PathBuf),

    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Form field is read-only: {0}")]
    ReadOnlyField(String),

    #[error("{field} cannot contain a path separator: {value:?}")]
    PathSeparator { field: String, value: String },

    #[error("Invalid session state transition from {from} to {to}")]
    InvalidState { from: String, to: String },

    #[error("Package manager resolve failed: {0}")]
    ResolveFailed(String),

    #[error("Spec error: {0}")]
    Spec(#[from] upm_spec::SpecError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Whether the user can fix this error by editing the form and resubmitting.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CoreError::MissingRequiredField { .. } | CoreError::PackageAlreadyExists(_)
        )
    }
}
