//! Unified error handling for Kiln Core.
//!
//! [`KilnError`] wraps domain and application errors. Besides suggestions and
//! a display category, every error knows its [`FailureTier`]: how much of a
//! run it is allowed to take down.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Kiln Core operations.
#[derive(Debug, Error, Clone)]
pub enum KilnError {
    /// Errors from the domain layer (business rule violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration and I/O failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

/// How far a failure propagates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FailureTier {
    /// Skip one artifact, warn, keep going.
    ArtifactRecoverable,
    /// Skip the rest of one component, keep going with the next.
    ComponentFatal,
    /// Abort the run.
    RunFatal,
}

impl KilnError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in Kiln".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(DomainError::InvalidRunConfig(_)) => ErrorCategory::Configuration,
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Template => ErrorCategory::Template,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Failure tier used by the orchestrator to isolate this error.
    pub fn tier(&self) -> FailureTier {
        match self {
            Self::Application(
                ApplicationError::SerializationUnavailable { .. }
                | ApplicationError::SerializationFailed { .. },
            ) => FailureTier::ArtifactRecoverable,
            Self::Application(ApplicationError::FilesystemError { .. })
            | Self::Domain(
                DomainError::AbsolutePathNotAllowed { .. } | DomainError::DuplicatePath { .. },
            ) => FailureTier::ComponentFatal,
            _ => FailureTier::RunFatal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type KilnResult<T> = Result<T, KilnError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn filesystem_errors_are_component_fatal() {
        let err: KilnError = ApplicationError::FilesystemError {
            path: PathBuf::from("/x"),
            reason: "denied".into(),
        }
        .into();
        assert_eq!(err.tier(), FailureTier::ComponentFatal);
    }

    #[test]
    fn missing_serializer_is_recoverable() {
        let err: KilnError = ApplicationError::SerializationUnavailable {
            reason: "feature off".into(),
        }
        .into();
        assert_eq!(err.tier(), FailureTier::ArtifactRecoverable);
    }

    #[test]
    fn template_problems_are_run_fatal() {
        let unreadable: KilnError = ApplicationError::TemplateUnavailable {
            name: "t.md".into(),
            reason: "not found".into(),
        }
        .into();
        let unresolved: KilnError = DomainError::UnresolvedPlaceholders {
            template: "t.md".into(),
            tokens: vec!["X".into()],
        }
        .into();
        assert_eq!(unreadable.tier(), FailureTier::RunFatal);
        assert_eq!(unresolved.tier(), FailureTier::RunFatal);
        assert_eq!(unreadable.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn rejected_run_config_is_a_configuration_error() {
        let err: KilnError = DomainError::InvalidRunConfig("instructions_file collides".into()).into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.tier(), FailureTier::RunFatal);
    }
}
