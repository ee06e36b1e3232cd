use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Subdirectories every component gets, relative to its root.
pub const COMPONENT_SUBDIRECTORIES: [&str; 5] = [
    "src",
    "tests/unit",
    "tests/integration",
    "tests/contracts",
    "benches",
];

/// Files the fixed emitters write into every component.
pub const GENERATED_FILES: [&str; 5] = [
    "Cargo.toml",
    "src/lib.rs",
    "src/types.rs",
    "README.md",
    "component.yaml",
];

/// The generated file or directory that `path` would land on, if any.
///
/// A directory counts when `path` names it or one of its ancestors.
pub fn reserved_entry(path: &RelativePath) -> Option<&'static str> {
    let path = path.as_path();
    GENERATED_FILES
        .iter()
        .find(|f| path == Path::new(f))
        .or_else(|| {
            COMPONENT_SUBDIRECTORIES
                .iter()
                .find(|d| Path::new(d).starts_with(path))
        })
        .copied()
}

/// Where one component's artifacts live on disk.
///
/// Pure data: creating the directories is the materializer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentLayout {
    root: PathBuf,
    directories: Vec<RelativePath>,
}

impl ComponentLayout {
    /// `<components_root>/<name>` with the standard subdirectories.
    pub fn for_component(components_root: &Path, name: &str) -> Self {
        Self {
            root: components_root.join(name),
            directories: COMPONENT_SUBDIRECTORIES
                .iter()
                .map(|d| RelativePath::new(*d))
                .collect(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn directories(&self) -> &[RelativePath] {
        &self.directories
    }

    /// Absolute (or root-relative) paths of every directory, root first.
    pub fn all_directories(&self) -> impl Iterator<Item = PathBuf> + '_ {
        std::iter::once(self.root.clone()).chain(self.directories.iter().map(|d| d.under(&self.root)))
    }

    pub fn resolve(&self, path: &RelativePath) -> PathBuf {
        path.under(&self.root)
    }
}

/// One file composed in memory, ready to be written in a single operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToWrite {
    pub path: RelativePath,
    pub content: String,
}

impl FileToWrite {
    pub fn new(path: impl Into<RelativePath>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// The files one emitter produced for one component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactDraft {
    files: Vec<FileToWrite>,
}

impl ArtifactDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(path: &str, content: impl Into<String>) -> Self {
        Self::new().with_file(path, content)
    }

    pub fn with_file(mut self, path: &str, content: impl Into<String>) -> Self {
        self.files.push(FileToWrite::new(path, content));
        self
    }

    pub fn files(&self) -> &[FileToWrite] {
        &self.files
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "files" });
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if !seen.insert(&file.path) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.to_string(),
                });
            }
        }
        Ok(())
    }
}
