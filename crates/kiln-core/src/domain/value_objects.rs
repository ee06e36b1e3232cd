//! Value objects: small, immutable, compared by value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// What a component builds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Library,
    Application,
}

impl ComponentKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Application => "application",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "library" | "lib" => Ok(Self::Library),
            "application" | "app" | "bin" => Ok(Self::Application),
            _ => Err(DomainError::InvalidKind {
                value: s.trim().to_string(),
            }),
        }
    }
}

/// Implementation-technology hints for a component.
///
/// Purely descriptive: generation never branches on these values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TechStack(Vec<String>);

impl TechStack {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            items
                .into_iter()
                .map(Into::into)
                .map(|s: String| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    /// Parse a comma-separated description such as `"Rust, ttf-parser"`.
    pub fn parse(text: &str) -> Self {
        Self::new(text.split(','))
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TechStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}
