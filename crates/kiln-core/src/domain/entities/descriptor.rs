//! Component descriptor: the declarative definition of one component.

use crate::domain::{
    error::DomainError,
    value_objects::{ComponentKind, TechStack},
};

/// A single component's declarative definition.
///
/// Descriptors are immutable once built. Cross-descriptor invariants
/// (unique names, resolvable dependencies) are checked by
/// [`Catalog::validate`](super::catalog::Catalog::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    name: String,
    kind: ComponentKind,
    responsibility: String,
    tech_stack: TechStack,
    dependencies: Vec<String>,
    size_estimate: u32,
}

impl ComponentDescriptor {
    pub fn builder(name: impl Into<String>) -> DescriptorBuilder {
        DescriptorBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn responsibility(&self) -> &str {
        &self.responsibility
    }

    pub fn tech_stack(&self) -> &TechStack {
        &self.tech_stack
    }

    /// Names of the components this one depends on, in declared order.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn size_estimate(&self) -> u32 {
        self.size_estimate
    }

    pub fn is_base(&self) -> bool {
        self.dependencies.is_empty()
    }
}

/// `true` for `[a-z][a-z0-9_-]*`.
pub fn is_valid_slug(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

/// Builder for [`ComponentDescriptor`].
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    name: String,
    kind: ComponentKind,
    responsibility: Option<String>,
    tech_stack: TechStack,
    dependencies: Vec<String>,
    size_estimate: u32,
}

impl DescriptorBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ComponentKind::Library,
            responsibility: None,
            tech_stack: TechStack::default(),
            dependencies: Vec::new(),
            size_estimate: 1,
        }
    }

    pub fn kind(mut self, kind: ComponentKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn responsibility(mut self, text: impl Into<String>) -> Self {
        self.responsibility = Some(text.into());
        self
    }

    pub fn tech_stack(mut self, stack: TechStack) -> Self {
        self.tech_stack = stack;
        self
    }

    pub fn depends_on(mut self, dependency: impl Into<String>) -> Self {
        self.dependencies.push(dependency.into());
        self
    }

    pub fn dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies
            .extend(dependencies.into_iter().map(Into::into));
        self
    }

    pub fn size_estimate(mut self, estimate: u32) -> Self {
        self.size_estimate = estimate;
        self
    }

    /// Build the descriptor.
    ///
    /// Only field-local checks happen here; a name that fails slug syntax is
    /// still built so catalog validation can report it alongside every other
    /// violation.
    pub fn build(self) -> Result<ComponentDescriptor, DomainError> {
        let responsibility = self
            .responsibility
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .ok_or(DomainError::MissingRequiredField {
                field: "responsibility",
            })?;

        Ok(ComponentDescriptor {
            name: self.name.trim().to_string(),
            kind: self.kind,
            responsibility,
            tech_stack: self.tech_stack,
            dependencies: self.dependencies,
            size_estimate: self.size_estimate,
        })
    }
}
