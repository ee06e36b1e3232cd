//! TOML catalog files.
//!
//! # Format
//!
//! ```toml
//! [[component]]
//! name           = "font_parser"
//! kind           = "library"          # library | application (alias: type)
//! responsibility = "Parse font files"
//! tech_stack     = "Rust, ttf-parser" # a string or a list
//! dependencies   = ["font_types"]
//! size_estimate  = 24000              # alias: estimated_tokens
//! spec_sections  = ["OpenType Parser (lines 390-438)"]
//! ```
//!
//! Loading only checks per-field shape. Cross-component rules (unique names,
//! known dependencies, cycles) are left to catalog validation so every
//! violation is reported at once.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use kiln_core::{
    domain::{
        Catalog, ComponentDescriptor, ComponentKind, DescriptorBuilder, DomainError, TechStack,
    },
    error::KilnError,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

/// A catalog plus the spec-section lookup declared alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub spec_sections: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Component #{index} ('{name}'): {source}")]
    Descriptor {
        index: usize,
        name: String,
        #[source]
        source: DomainError,
    },
}

impl From<CatalogLoadError> for KilnError {
    fn from(err: CatalogLoadError) -> Self {
        match err {
            CatalogLoadError::Descriptor { source, .. } => KilnError::Domain(source),
            other => KilnError::Configuration {
                message: other.to_string(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default, rename = "component")]
    components: Vec<ComponentEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ComponentEntry {
    name: String,
    #[serde(default, alias = "type")]
    kind: Option<String>,
    responsibility: String,
    #[serde(default)]
    tech_stack: Option<TechStackEntry>,
    #[serde(default)]
    dependencies: Vec<String>,
    #[serde(default = "default_size", alias = "estimated_tokens")]
    size_estimate: u32,
    #[serde(default)]
    spec_sections: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TechStackEntry {
    Text(String),
    List(Vec<String>),
}

impl From<TechStackEntry> for TechStack {
    fn from(entry: TechStackEntry) -> Self {
        match entry {
            TechStackEntry::Text(text) => TechStack::parse(&text),
            TechStackEntry::List(items) => TechStack::new(items),
        }
    }
}

fn default_size() -> u32 {
    1
}

/// Parse catalog text.
pub fn parse_catalog(text: &str) -> Result<LoadedCatalog, CatalogLoadError> {
    let file: CatalogFile = toml::from_str(text)?;

    let mut descriptors = Vec::with_capacity(file.components.len());
    let mut spec_sections = BTreeMap::new();

    for (index, entry) in file.components.into_iter().enumerate() {
        let name = entry.name.clone();
        let descriptor = to_descriptor(entry.name, entry.kind, entry.responsibility)
            .map(|b| {
                b.tech_stack(entry.tech_stack.map(TechStack::from).unwrap_or_default())
                    .dependencies(entry.dependencies)
                    .size_estimate(entry.size_estimate)
            })
            .and_then(|b| b.build())
            .map_err(|source| CatalogLoadError::Descriptor {
                index,
                name: name.clone(),
                source,
            })?;

        if !entry.spec_sections.is_empty() {
            spec_sections.insert(name, entry.spec_sections);
        }
        descriptors.push(descriptor);
    }

    debug!(components = descriptors.len(), "catalog parsed");
    Ok(LoadedCatalog {
        catalog: Catalog::new(descriptors),
        spec_sections,
    })
}

fn to_descriptor(
    name: String,
    kind: Option<String>,
    responsibility: String,
) -> Result<DescriptorBuilder, DomainError> {
    let kind = match kind {
        Some(k) => k.parse::<ComponentKind>()?,
        None => ComponentKind::Library,
    };
    Ok(ComponentDescriptor::builder(name)
        .kind(kind)
        .responsibility(responsibility))
}

/// Read and parse a catalog file.
#[instrument]
pub fn load_catalog(path: &Path) -> Result<LoadedCatalog, CatalogLoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&text)
}
