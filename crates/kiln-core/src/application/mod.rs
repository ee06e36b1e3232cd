//! Application layer for Kiln.
//!
//! This layer contains:
//! - **Services**: the `Orchestrator` and the pieces it drives
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{DirectoryMaterializer, Orchestrator, TemplateEngine};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ManifestSerializer, NoopObserver, RunObserver, TemplateStore};

pub use error::ApplicationError;
