//! Kiln Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Kiln, a
//! generator that turns a component catalog into per-component project
//! skeletons.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             kiln-cli (CLI)              │
//! │      (config, logging, console UI)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            Orchestrator                 │
//! │ Validate -> LoadTemplate -> Emit x N    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ Filesystem, TemplateStore, Serializer,  │
//! │ RunObserver                             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     kiln-adapters (Infrastructure)      │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ Catalog, Descriptor, TemplateContext,   │
//! │ Layout, RunReport                       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kiln_core::prelude::*;
//!
//! let catalog = Catalog::new(vec![
//!     ComponentDescriptor::builder("core")
//!         .responsibility("Shared types")
//!         .build()?,
//! ]);
//!
//! let orchestrator = Orchestrator::new(RunConfig::new("."), filesystem, templates, None);
//! let report = orchestrator.run(&catalog)?;
//! println!("{} components generated", report.succeeded());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, Orchestrator,
        ports::{Filesystem, ManifestSerializer, NoopObserver, RunObserver, TemplateStore},
    };
    pub use crate::domain::{
        ArtifactKind, ArtifactOutcome, Catalog, ComponentDescriptor, ComponentKind,
        ComponentReport, DomainError, MachineManifest, RunConfig, RunReport, TechStack,
    };
    pub use crate::error::{FailureTier, KilnError, KilnResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
