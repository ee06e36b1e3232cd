//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the orchestrator needs from the outside world.
//! The `kiln-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ArtifactKind, ComponentReport, MachineManifest};
use crate::error::{KilnError, KilnResult};

/// Port for filesystem operations.
///
/// Implemented by:
/// - `kiln_adapters::filesystem::LocalFilesystem` (production)
/// - `kiln_adapters::filesystem::MemoryFilesystem` (testing)
///
/// `write_file` must replace the target in one step: a reader never sees a
/// half-written file, even if the process dies mid-write.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> KilnResult<()>;

    /// Write content to a file, fully replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> KilnResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for reading template assets.
///
/// Implemented by:
/// - `kiln_adapters::template_store::FileTemplateStore` (assets on disk)
/// - `kiln_adapters::template_store::InMemoryTemplateStore` (testing, embedded)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Read the raw text of the named template.
    fn load(&self, name: &str) -> KilnResult<String>;
}

/// Port for structured (machine-readable) serialization.
///
/// Optional: when none is injected, the machine manifest is skipped with a
/// warning and everything else is still produced.
#[cfg_attr(test, mockall::automock)]
pub trait ManifestSerializer: Send + Sync {
    /// Short format name for logs, e.g. `yaml`.
    fn format_name(&self) -> &'static str;

    /// Serialize one component manifest.
    fn serialize(&self, manifest: &MachineManifest) -> KilnResult<String>;
}

/// Progress sink for a generation run.
///
/// Every method has an empty default, so observers implement only what they
/// display. The core never prints.
pub trait RunObserver {
    fn run_started(&mut self, _components: usize) {}

    fn component_started(&mut self, _name: &str) {}

    fn artifact_written(&mut self, _component: &str, _kind: ArtifactKind, _files: &[&Path]) {}

    fn artifact_skipped(&mut self, _component: &str, _kind: ArtifactKind, _reason: &str) {}

    fn component_failed(&mut self, _component: &str, _error: &KilnError) {}

    fn component_finished(&mut self, _report: &ComponentReport) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
