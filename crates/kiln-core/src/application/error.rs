//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The shared template asset could not be read.
    #[error("Template '{name}' is unavailable: {reason}")]
    TemplateUnavailable { name: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// No structured serializer is available in this build.
    #[error("Structured serialization is unavailable: {reason}")]
    SerializationUnavailable { reason: String },

    /// The serializer rejected a record.
    #[error("Serialization failed for {artifact}: {reason}")]
    SerializationFailed { artifact: String, reason: String },

    /// Shared adapter state is inaccessible (lock poisoned).
    #[error("Adapter state is locked")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateUnavailable { name, .. } => vec![
                format!("Could not read template: {}", name),
                "Check that the template exists under the project root".into(),
                "Or point at another file with --template".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Make sure no regular file sits where a directory is expected".into(),
            ],
            Self::SerializationUnavailable { .. } => vec![
                "Rebuild with the 'yaml' feature to emit machine manifests".into(),
            ],
            Self::StoreLockError => vec![
                "Internal adapter state was poisoned by an earlier panic".into(),
                "Re-run the generator".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateUnavailable { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::SerializationUnavailable { .. } | Self::SerializationFailed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
