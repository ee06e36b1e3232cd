//! The ordered, read-only set of descriptors driving one run.

use std::collections::{HashMap, HashSet};

use crate::domain::{
    entities::descriptor::{ComponentDescriptor, is_valid_slug},
    error::{CatalogViolation, DomainError, Violations},
};

/// Ordered sequence of component descriptors.
///
/// Declaration order is processing order. The catalog is never mutated after
/// construction; a run receives it by shared reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    components: Vec<ComponentDescriptor>,
}

impl Catalog {
    pub fn new(components: Vec<ComponentDescriptor>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[ComponentDescriptor] {
        &self.components
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.components.iter()
    }

    pub fn get(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.components.iter().find(|c| c.name() == name)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Sum of all size estimates.
    pub fn total_size_estimate(&self) -> u64 {
        self.components
            .iter()
            .map(|c| u64::from(c.size_estimate()))
            .sum()
    }

    /// Check every catalog invariant and report all violations at once.
    ///
    /// Violations are listed in declaration order; cycles come last.
    pub fn validate(&self) -> Result<(), DomainError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::InvalidCatalog(Violations::new(violations)))
        }
    }

    fn violations(&self) -> Vec<CatalogViolation> {
        if self.components.is_empty() {
            return vec![CatalogViolation::Empty];
        }

        let known: HashSet<&str> = self.components.iter().map(|c| c.name()).collect();
        let mut seen_names = HashSet::new();
        let mut out = Vec::new();

        for component in &self.components {
            let name = component.name();

            if !is_valid_slug(name) {
                out.push(CatalogViolation::InvalidName { name: name.into() });
            }
            if !seen_names.insert(name) {
                out.push(CatalogViolation::DuplicateName { name: name.into() });
            }
            if component.size_estimate() == 0 {
                out.push(CatalogViolation::ZeroSizeEstimate { name: name.into() });
            }

            let mut seen_deps = HashSet::new();
            for dependency in component.dependencies() {
                if dependency == name {
                    out.push(CatalogViolation::SelfDependency { name: name.into() });
                } else if !known.contains(dependency.as_str()) {
                    out.push(CatalogViolation::UnknownDependency {
                        name: name.into(),
                        dependency: dependency.clone(),
                    });
                }
                if !seen_deps.insert(dependency.as_str()) {
                    out.push(CatalogViolation::DuplicateDependency {
                        name: name.into(),
                        dependency: dependency.clone(),
                    });
                }
            }
        }

        out.extend(
            self.cycles()
                .into_iter()
                .map(|path| CatalogViolation::DependencyCycle { path }),
        );
        out
    }

    /// Depth-first search for dependency cycles.
    ///
    /// Self-edges and unknown names are skipped; they are reported separately.
    fn cycles(&self) -> Vec<Vec<String>> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            OnStack,
            Done,
        }

        let index: HashMap<&str, usize> = self
            .components
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name(), i))
            .collect();
        let mut marks = vec![Mark::Unvisited; self.components.len()];
        let mut stack: Vec<usize> = Vec::new();
        let mut cycles = Vec::new();

        fn visit(
            node: usize,
            catalog: &Catalog,
            index: &HashMap<&str, usize>,
            marks: &mut [Mark],
            stack: &mut Vec<usize>,
            cycles: &mut Vec<Vec<String>>,
        ) {
            marks[node] = Mark::OnStack;
            stack.push(node);

            let component = &catalog.components[node];
            for dependency in component.dependencies() {
                let Some(&next) = index.get(dependency.as_str()) else {
                    continue;
                };
                if next == node {
                    continue;
                }
                match marks[next] {
                    Mark::Unvisited => visit(next, catalog, index, marks, stack, cycles),
                    Mark::OnStack => {
                        let start = stack.iter().position(|&n| n == next).unwrap_or(0);
                        let mut path: Vec<String> = stack[start..]
                            .iter()
                            .map(|&n| catalog.components[n].name().to_string())
                            .collect();
                        path.push(catalog.components[next].name().to_string());
                        cycles.push(path);
                    }
                    Mark::Done => {}
                }
            }

            stack.pop();
            marks[node] = Mark::Done;
        }

        for node in 0..self.components.len() {
            if marks[node] == Mark::Unvisited {
                visit(node, self, &index, &mut marks, &mut stack, &mut cycles);
            }
        }
        cycles
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ComponentDescriptor;
    type IntoIter = std::slice::Iter<'a, ComponentDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
