// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Kiln.
//!
//! Pure data and rules: descriptors, the catalog and its invariants, template
//! substitution, layouts and run reports. No filesystem access happens here;
//! I/O goes through the ports in `crate::application::ports`.
//!
//! - **No I/O**: no filesystem, network or environment access
//! - **Immutable entities**: descriptors, catalogs and contexts never change
//!   after construction
//! - **Deterministic**: every ordered collection is a `Vec` or `BTreeMap`
//
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    catalog::Catalog,
    common::RelativePath,
    descriptor::{ComponentDescriptor, DescriptorBuilder, is_valid_slug},
    layout::{ArtifactDraft, COMPONENT_SUBDIRECTORIES, ComponentLayout, FileToWrite},
    manifest::{DependencyRef, MachineManifest},
    report::{
        ArtifactKind, ArtifactOutcome, ArtifactRecord, ComponentReport, ComponentStatus,
        IssueLevel, RunIssue, RunReport,
    },
    run_config::{PackageDefaults, RunConfig, SPEC_SECTIONS_FALLBACK, Tooling},
    template::{TemplateAsset, TemplateContext},
};

pub use error::{CatalogViolation, DomainError, ErrorCategory, Violations};

pub use value_objects::{ComponentKind, TechStack};

pub use validation::DomainValidator;
