//! Template store reading assets from disk.

use std::path::{Path, PathBuf};

use kiln_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::KilnResult,
};
use tracing::debug;

/// Reads templates relative to a base directory (usually the project root).
///
/// Absolute names are read as-is.
#[derive(Debug, Clone)]
pub struct FileTemplateStore {
    base: PathBuf,
}

impl FileTemplateStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Where `name` would be read from.
    pub fn resolve(&self, name: &str) -> PathBuf {
        let path = Path::new(name);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base.join(path)
        }
    }
}

impl TemplateStore for FileTemplateStore {
    fn load(&self, name: &str) -> KilnResult<String> {
        let path = self.resolve(name);
        debug!(path = %path.display(), "reading template");
        std::fs::read_to_string(&path).map_err(|e| {
            ApplicationError::FilesystemError {
                path,
                reason: e.to_string(),
            }
            .into()
        })
    }
}
