//! Templates compiled into the binary.
//!
//! The generic component template ships in the repository under
//! `templates/component-generic.md` and is embedded here so the generator
//! also works from a directory that has no `templates/` of its own.

/// Name under which the embedded template is registered.
pub const COMPONENT_GENERIC_NAME: &str = "builtin:component-generic";

/// Text of the generic component instructions template.
pub const COMPONENT_GENERIC: &str = include_str!("../../../templates/component-generic.md");

/// Every built-in template as `(name, text)` pairs.
pub fn all_templates() -> Vec<(&'static str, &'static str)> {
    vec![(COMPONENT_GENERIC_NAME, COMPONENT_GENERIC)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::domain::{RunConfig, TemplateAsset};
    use kiln_core::application::services::InstructionsEmitter;
    use kiln_core::domain::{Catalog, ComponentDescriptor};

    #[test]
    fn generic_template_resolves_for_any_component() {
        let asset = TemplateAsset::new(COMPONENT_GENERIC_NAME, COMPONENT_GENERIC);
        let catalog = Catalog::new(vec![
            ComponentDescriptor::builder("core")
                .responsibility("Shared types")
                .build()
                .unwrap(),
        ]);

        InstructionsEmitter::new(asset)
            .preflight(&catalog, &RunConfig::new("/p"))
            .unwrap();
    }

    #[test]
    fn generic_template_uses_placeholders() {
        let asset = TemplateAsset::new(COMPONENT_GENERIC_NAME, COMPONENT_GENERIC);
        let tokens = asset.placeholders();
        assert!(tokens.contains(&"COMPONENT_NAME"));
        assert!(tokens.contains(&"ADDITIONAL_INSTRUCTIONS"));
    }
}
