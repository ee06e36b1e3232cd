//! Template loading and rendering.

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{TemplateAsset, TemplateContext},
    error::{KilnError, KilnResult},
};

/// Loads template assets through the store and renders them.
///
/// Rendering itself is pure (see [`TemplateContext::render`]); the engine
/// only adds I/O and error mapping.
pub struct TemplateEngine<'a> {
    store: &'a dyn TemplateStore,
}

impl<'a> TemplateEngine<'a> {
    pub fn new(store: &'a dyn TemplateStore) -> Self {
        Self { store }
    }

    /// Read a template asset. Any store failure becomes
    /// [`ApplicationError::TemplateUnavailable`].
    #[instrument(skip(self))]
    pub fn load(&self, name: &str) -> KilnResult<TemplateAsset> {
        let text = self.store.load(name).map_err(|e| {
            KilnError::from(ApplicationError::TemplateUnavailable {
                name: name.to_string(),
                reason: e.to_string(),
            })
        })?;
        let asset = TemplateAsset::new(name, text);
        debug!(
            placeholders = asset.placeholders().len(),
            "template loaded"
        );
        Ok(asset)
    }

    /// Fail-closed substitution of every `{{TOKEN}}` in `asset`.
    pub fn render(asset: &TemplateAsset, context: &TemplateContext) -> KilnResult<String> {
        Ok(context.render(asset)?)
    }
}
