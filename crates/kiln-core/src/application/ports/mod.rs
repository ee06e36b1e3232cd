//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `kiln-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation and atomic file writes
//!   - `TemplateStore`: template asset retrieval
//!   - `ManifestSerializer`: optional structured serialization
//!   - `RunObserver`: progress events
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by `Orchestrator`)

pub mod output;

pub use output::{Filesystem, ManifestSerializer, NoopObserver, RunObserver, TemplateStore};

#[cfg(test)]
pub use output::{MockFilesystem, MockManifestSerializer, MockTemplateStore};
