// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::fmt;

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (recorded into run reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(Violations),

    #[error("Unknown component kind '{value}'")]
    InvalidKind { value: String },

    #[error("Invalid run configuration: {0}")]
    InvalidRunConfig(String),

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Duplicate path in artifact: {path}")]
    DuplicatePath { path: String },

    // ========================================================================
    // Template Errors
    // ========================================================================
    #[error("Template '{template}' has unresolved placeholders: {}", .tokens.join(", "))]
    UnresolvedPlaceholders {
        template: String,
        tokens: Vec<String>,
    },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidCatalog(violations) => {
                let mut out = vec!["Fix the following catalog entries:".to_string()];
                out.extend(violations.iter().map(|v| format!("  • {v}")));
                out
            }
            Self::InvalidKind { value } => vec![
                format!("'{}' is not a component kind", value),
                "Use 'library' or 'application' (aliases: lib, app, bin)".into(),
            ],
            Self::UnresolvedPlaceholders { template, tokens } => vec![
                format!("Template '{}' references unknown placeholders", template),
                format!("Remove or rename: {}", tokens.join(", ")),
                "Known placeholders are listed in templates/component-generic.md".into(),
            ],
            Self::MissingRequiredField { field } => {
                vec![format!("Provide a value for '{}'", field)]
            }
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCatalog(_)
            | Self::InvalidKind { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::UnresolvedPlaceholders { .. } => ErrorCategory::Template,
            Self::InvalidRunConfig(_)
            | Self::AbsolutePathNotAllowed { .. }
            | Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
    Internal,
}

/// A single catalog invariant violation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogViolation {
    #[error("catalog contains no components")]
    Empty,

    #[error("'{name}' is not a valid component name")]
    InvalidName { name: String },

    #[error("component '{name}' is declared more than once")]
    DuplicateName { name: String },

    #[error("component '{name}' lists itself as a dependency")]
    SelfDependency { name: String },

    #[error("component '{name}' lists dependency '{dependency}' more than once")]
    DuplicateDependency { name: String, dependency: String },

    #[error("component '{name}' depends on unknown component '{dependency}'")]
    UnknownDependency { name: String, dependency: String },

    #[error("component '{name}' has a zero size estimate")]
    ZeroSizeEstimate { name: String },

    #[error("dependency cycle: {}", .path.join(" -> "))]
    DependencyCycle { path: Vec<String> },
}

/// Ordered list of catalog violations, displayed as `a; b; c`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Violations(Vec<CatalogViolation>);

impl Violations {
    pub fn new(violations: Vec<CatalogViolation>) -> Self {
        Self(violations)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogViolation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, violation: &CatalogViolation) -> bool {
        self.0.contains(violation)
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violations_join_with_semicolons() {
        let v = Violations::new(vec![
            CatalogViolation::DuplicateName { name: "core".into() },
            CatalogViolation::SelfDependency { name: "api".into() },
        ]);
        assert_eq!(
            v.to_string(),
            "component 'core' is declared more than once; component 'api' lists itself as a dependency"
        );
    }

    #[test]
    fn unresolved_placeholders_lists_tokens() {
        let err = DomainError::UnresolvedPlaceholders {
            template: "component-generic.md".into(),
            tokens: vec!["AUTHOR".into(), "YEAR".into()],
        };
        assert!(err.to_string().ends_with("AUTHOR, YEAR"));
        assert_eq!(err.category(), ErrorCategory::Template);
    }

    #[test]
    fn catalog_suggestions_enumerate_violations() {
        let err = DomainError::InvalidCatalog(Violations::new(vec![
            CatalogViolation::UnknownDependency {
                name: "api".into(),
                dependency: "ghost".into(),
            },
        ]));
        let suggestions = err.suggestions();
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[1].contains("ghost"));
    }
}
