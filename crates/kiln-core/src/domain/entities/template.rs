//! Template assets and placeholder substitution.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TemplateAsset (Entity)                                     │
//! │  ├── name: where it was loaded from                         │
//! │  └── text: raw content with {{TOKEN}} placeholders          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TemplateContext (Value Object)                             │
//! │  └── TOKEN -> value, e.g. {{COMPONENT_NAME}} -> "font_types"│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Placeholders are `{{` + `[A-Za-z0-9_]+` + `}}`. Anything else between
//! braces is ordinary text.
//!
//! Rendering fails closed: a template token with no context entry is an
//! error naming every such token, never a literal `{{TOKEN}}` in the output.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::error::DomainError;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("placeholder pattern"));

/// The text of a template together with the name it was loaded under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateAsset {
    name: String,
    text: String,
}

impl TemplateAsset {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Distinct placeholder tokens in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        PLACEHOLDER
            .captures_iter(&self.text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .filter(|t| seen.insert(*t))
            .collect()
    }
}

/// Placeholder token to resolved value.
///
/// Immutable after creation - `with_variable` returns a new instance.
/// Backed by a `BTreeMap` so iteration (and therefore every derived output)
/// is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    variables: BTreeMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Merge another context; entries in `other` win on conflict.
    pub fn merged(mut self, other: TemplateContext) -> Self {
        self.variables.extend(other.variables);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    /// Substitute every placeholder in `asset` in a single pass.
    ///
    /// Values are inserted verbatim and never rescanned, so a value that
    /// itself looks like `{{TOKEN}}` survives unchanged.
    pub fn render(&self, asset: &TemplateAsset) -> Result<String, DomainError> {
        let missing: BTreeSet<&str> = PLACEHOLDER
            .captures_iter(asset.text())
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .filter(|token| !self.contains(token))
            .collect();

        if !missing.is_empty() {
            return Err(DomainError::UnresolvedPlaceholders {
                template: asset.name().to_string(),
                tokens: missing.into_iter().map(String::from).collect(),
            });
        }

        let rendered = PLACEHOLDER.replace_all(asset.text(), |caps: &Captures<'_>| {
            self.get(&caps[1]).unwrap_or_default().to_string()
        });
        Ok(rendered.into_owned())
    }
}
