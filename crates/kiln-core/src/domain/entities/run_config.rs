//! Explicit per-run configuration.
//!
//! Everything a run needs beyond the catalog: where to write, which version to
//! stamp, which template to render and the tooling hints injected into
//! generated documents. Built by the caller and handed to the orchestrator;
//! there is no process-wide state.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::{
        common::RelativePath,
        layout::{self, ComponentLayout},
    },
    error::DomainError,
};

/// Shown when a component has no entry in the spec-section lookup.
pub const SPEC_SECTIONS_FALLBACK: &str = "- See full specification";

/// Fields copied into every generated build manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDefaults {
    pub edition: String,
    pub authors: Vec<String>,
    pub license: String,
}

impl Default for PackageDefaults {
    fn default() -> Self {
        Self {
            edition: "2021".into(),
            authors: vec!["Kiln Contributors".into()],
            license: "MIT OR Apache-2.0".into(),
        }
    }
}

/// Style and tooling hints. Written into documents, never executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooling {
    pub language: String,
    pub style_guide: String,
    pub formatter: String,
    pub linter: String,
    pub lint_command: String,
}

impl Default for Tooling {
    fn default() -> Self {
        Self {
            language: "rust".into(),
            style_guide: "Rust Style Guide".into(),
            formatter: "cargo fmt".into(),
            linter: "cargo clippy".into(),
            lint_command: "cargo clippy".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory everything is generated under.
    pub project_root: PathBuf,
    /// Version stamped into every manifest.
    pub project_version: String,
    /// Directory (relative to the root) holding one subdirectory per component.
    pub components_dir: String,
    /// Name of the shared instruction template, resolved by the template store.
    pub instructions_template: String,
    /// File name the rendered instructions are written to.
    pub instructions_file: String,
    /// Project specification document referenced from generated docs.
    pub spec_document: String,
    pub package: PackageDefaults,
    pub tooling: Tooling,
    /// Component name to the specification sections relevant to it.
    pub spec_sections: BTreeMap<String, Vec<String>>,
}

impl RunConfig {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            project_version: "0.1.0".into(),
            components_dir: "components".into(),
            instructions_template: "templates/component-generic.md".into(),
            instructions_file: "INSTRUCTIONS.md".into(),
            spec_document: "specification.md".into(),
            package: PackageDefaults::default(),
            tooling: Tooling::default(),
            spec_sections: BTreeMap::new(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.project_version = version.into();
        self
    }

    pub fn with_instructions_template(mut self, name: impl Into<String>) -> Self {
        self.instructions_template = name.into();
        self
    }

    pub fn with_spec_sections<I, S>(mut self, component: impl Into<String>, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spec_sections.insert(
            component.into(),
            sections.into_iter().map(Into::into).collect(),
        );
        self
    }

    pub fn components_root(&self) -> PathBuf {
        self.project_root.join(&self.components_dir)
    }

    pub fn layout_for(&self, component: &str) -> ComponentLayout {
        ComponentLayout::for_component(&self.components_root(), component)
    }

    pub fn spec_document_path(&self) -> PathBuf {
        let doc = Path::new(&self.spec_document);
        if doc.is_absolute() {
            doc.to_path_buf()
        } else {
            self.project_root.join(doc)
        }
    }

    /// Markdown bullet list of the sections relevant to `component`.
    pub fn spec_sections_for(&self, component: &str) -> String {
        match self.spec_sections.get(component) {
            Some(sections) if !sections.is_empty() => sections
                .iter()
                .map(|s| format!("- {s}"))
                .collect::<Vec<_>>()
                .join("\n"),
            _ => SPEC_SECTIONS_FALLBACK.to_string(),
        }
    }

    /// `^<version>`, the range other components use to depend on this run's output.
    pub fn version_range(&self) -> String {
        format!("^{}", self.project_version)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let required = [
            ("project_version", &self.project_version),
            ("components_dir", &self.components_dir),
            ("instructions_template", &self.instructions_template),
            ("instructions_file", &self.instructions_file),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DomainError::InvalidRunConfig(format!("{field} is empty")));
            }
        }
        RelativePath::try_new(&self.components_dir)?;
        let instructions = RelativePath::try_new(&self.instructions_file)?;
        if let Some(taken) = layout::reserved_entry(&instructions) {
            return Err(DomainError::InvalidRunConfig(format!(
                "instructions_file '{}' collides with generated '{taken}'",
                self.instructions_file
            )));
        }
        Ok(())
    }
}
