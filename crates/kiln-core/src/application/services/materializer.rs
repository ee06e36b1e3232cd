//! Idempotent creation of component directory trees.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::ComponentLayout,
    error::KilnResult,
};

/// Ensures directories exist, creating missing ancestors.
pub struct DirectoryMaterializer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> DirectoryMaterializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// No-op when `path` is already a directory; an error when it exists as
    /// anything else.
    pub fn ensure(&self, path: &Path) -> KilnResult<()> {
        if self.filesystem.is_dir(path) {
            debug!(path = %path.display(), "directory already present");
            return Ok(());
        }
        if self.filesystem.exists(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "path exists and is not a directory".into(),
            }
            .into());
        }
        self.filesystem.create_dir_all(path)
    }

    /// Component root first, then each standard subdirectory.
    #[instrument(skip_all, fields(root = %layout.root().display()))]
    pub fn ensure_layout(&self, layout: &ComponentLayout) -> KilnResult<()> {
        for dir in layout.all_directories() {
            self.ensure(&dir)?;
        }
        Ok(())
    }
}
