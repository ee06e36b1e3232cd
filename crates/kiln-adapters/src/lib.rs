//! Infrastructure adapters for Kiln.
//!
//! This crate implements the ports defined in `kiln_core::application::ports`
//! and supplies the catalog sources. It contains all I/O.

pub mod builtin_catalog;
pub mod builtin_templates;
pub mod catalog_loader;
pub mod filesystem;
pub mod serializer;
pub mod template_store;

// Re-export commonly used adapters
pub use catalog_loader::{CatalogLoadError, LoadedCatalog, load_catalog, parse_catalog};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
#[cfg(feature = "yaml")]
pub use serializer::YamlManifestSerializer;
pub use serializer::default_serializer;
pub use template_store::{FileTemplateStore, InMemoryTemplateStore};
