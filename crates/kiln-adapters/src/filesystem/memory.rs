//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use kiln_core::{
    application::{ApplicationError, ports::Filesystem},
    error::KilnResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle while the orchestrator
/// owns another. Paths registered with [`deny`](Self::deny) reject every
/// write or directory creation at or below them.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    denied: Vec<PathBuf>,
}

impl MemoryFilesystemInner {
    fn check_allowed(&self, path: &Path) -> KilnResult<()> {
        if self.denied.iter().any(|d| path.starts_with(d)) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into());
        }
        Ok(())
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every operation at or below `path` fail.
    pub fn deny(&self, path: impl Into<PathBuf>) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.denied.push(path.into());
        }
        self
    }

    /// Place a regular file without any checks (to set up conflicts).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path.into(), content.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All files, sorted by path.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Every file with its content, for byte-for-byte comparisons.
    pub fn snapshot(&self) -> BTreeMap<PathBuf, String> {
        self.inner
            .read()
            .map(|inner| inner.files.clone())
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> KilnResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.check_allowed(path)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::FilesystemError {
                    path: current,
                    reason: "a file exists where a directory is expected".into(),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> KilnResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.check_allowed(path)?;

        if inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "is a directory".into(),
            }
            .into());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p/components/core/src")).unwrap();
        assert!(fs.is_dir(Path::new("/p/components")));
        assert!(fs.is_dir(Path::new("/p/components/core/src")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/p/a.txt"), "x").is_err());
        fs.create_dir_all(Path::new("/p")).unwrap();
        fs.write_file(Path::new("/p/a.txt"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/p/a.txt")).as_deref(), Some("x"));
    }

    #[test]
    fn denied_paths_fail() {
        let fs = MemoryFilesystem::new();
        fs.deny("/p/components/core");
        assert!(fs.create_dir_all(Path::new("/p/components/core/src")).is_err());
        fs.create_dir_all(Path::new("/p/components/api")).unwrap();
    }

    #[test]
    fn file_blocks_directory() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("/p/components", "not a dir");
        assert!(fs.exists(Path::new("/p/components")));
        assert!(!fs.is_dir(Path::new("/p/components")));
        assert!(fs.create_dir_all(Path::new("/p/components/core")).is_err());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        other.create_dir_all(Path::new("/x")).unwrap();
        other.write_file(Path::new("/x/f"), "1").unwrap();
        assert_eq!(fs.snapshot().len(), 1);
    }
}
