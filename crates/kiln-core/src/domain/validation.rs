use crate::domain::{
    entities::{Catalog, RunConfig, layout::ArtifactDraft},
    error::DomainError,
};

/// Single entry point for domain validation, used by the application layer.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_catalog(catalog: &Catalog) -> Result<(), DomainError> {
        catalog.validate()
    }

    pub fn validate_run_config(config: &RunConfig) -> Result<(), DomainError> {
        config.validate()
    }

    pub fn validate_draft(draft: &ArtifactDraft) -> Result<(), DomainError> {
        draft.validate()
    }
}
