//! In-memory template store.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use kiln_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::KilnResult,
};

use crate::builtin_templates;

/// Thread-safe in-memory template store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryTemplateStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the built-in templates registered.
    pub fn with_builtin() -> KilnResult<Self> {
        let store = Self::new();
        for (name, text) in builtin_templates::all_templates() {
            store.insert(name, text)?;
        }
        Ok(store)
    }

    /// Insert or replace a template.
    pub fn insert(&self, name: impl Into<String>, text: impl Into<String>) -> KilnResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(name.into(), text.into());
        Ok(())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|i| i.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn load(&self, name: &str) -> KilnResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(name).cloned().ok_or_else(|| {
            ApplicationError::TemplateUnavailable {
                name: name.to_string(),
                reason: "no such template in memory".into(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin_templates::COMPONENT_GENERIC_NAME;

    #[test]
    fn builtin_store_has_generic_template() {
        let store = InMemoryTemplateStore::with_builtin().unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.load(COMPONENT_GENERIC_NAME).unwrap().contains("{{COMPONENT_NAME}}"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        assert!(InMemoryTemplateStore::new().load("missing").is_err());
    }
}
