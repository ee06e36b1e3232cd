//! Per-component instructions rendered from the shared template.
//!
//! The template is loaded once per run and handed to the emitter. Each
//! component gets a context built from its descriptor merged over the
//! run-wide values; any token the template uses that neither provides is a
//! hard error.

use super::{EmitInput, Emission, Emitter};
use crate::{
    application::services::TemplateEngine,
    domain::{
        ArtifactDraft, ArtifactKind, Catalog, ComponentDescriptor, RunConfig, TemplateAsset,
        TemplateContext,
    },
    error::KilnResult,
};

pub const ADDITIONAL_INSTRUCTIONS_HEADING: &str = "## Rust-Specific Instructions";

const ADDITIONAL_INSTRUCTIONS_BODY: &str = "\
### Code Organization
- Use modules for logical grouping
- Keep public API surface small
- Use re-exports in lib.rs for convenience
- Document all public items

### Error Handling
- Use Result<T, E> for fallible operations
- Define custom error types with thiserror
- Provide helpful error messages

### Testing
- Unit tests in same file as code (#[cfg(test)] mod tests)
- Integration tests in tests/ directory
- Property tests with proptest where inputs are structured

### Performance
- Benchmark with criterion
- Profile before optimizing

### Unsafe Code
- Avoid unsafe unless absolutely necessary
- Document the invariants every unsafe block relies on";

pub struct InstructionsEmitter {
    template: TemplateAsset,
}

impl InstructionsEmitter {
    pub fn new(template: TemplateAsset) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &TemplateAsset {
        &self.template
    }

    /// Values shared by every component in a run.
    pub fn global_context(config: &RunConfig) -> TemplateContext {
        TemplateContext::new()
            .with_variable("PROJECT_VERSION", &config.project_version)
            .with_variable("PROJECT_ROOT", config.project_root.display().to_string())
            .with_variable("LANGUAGE", &config.tooling.language)
            .with_variable("STYLE_GUIDE", &config.tooling.style_guide)
            .with_variable("FORMATTER", &config.tooling.formatter)
            .with_variable("LINTER", &config.tooling.linter)
            .with_variable("LINT_COMMAND", &config.tooling.lint_command)
            .with_variable(
                "SPEC_DOCUMENT",
                config.spec_document_path().display().to_string(),
            )
    }

    /// Full context for one component: its own values over the globals.
    pub fn context_for(descriptor: &ComponentDescriptor, config: &RunConfig) -> TemplateContext {
        let name = descriptor.name();
        let dependencies = if descriptor.is_base() {
            "None".to_string()
        } else {
            descriptor.dependencies().join(", ")
        };
        let sections = config.spec_sections_for(name);
        let additional = format!(
            "{ADDITIONAL_INSTRUCTIONS_HEADING}\n\n{ADDITIONAL_INSTRUCTIONS_BODY}\n\n\
             ## Specification Reference\n\n\
             Full specification: `{}`\n\n\
             Component sections:\n{sections}\n",
            config.spec_document_path().display(),
        );

        let component = TemplateContext::new()
            .with_variable("COMPONENT_NAME", name)
            .with_variable("COMPONENT_KIND", descriptor.kind().as_str())
            .with_variable("COMPONENT_RESPONSIBILITY", descriptor.responsibility())
            .with_variable("TECH_STACK", descriptor.tech_stack().to_string())
            .with_variable("SIZE_ESTIMATE", descriptor.size_estimate().to_string())
            .with_variable("CURRENT_SIZE", "0")
            .with_variable("DEPENDENCIES", dependencies)
            .with_variable("SPEC_SECTIONS", sections)
            .with_variable("ADDITIONAL_INSTRUCTIONS", additional);

        Self::global_context(config).merged(component)
    }

    /// Render for every descriptor without writing anything, so a template
    /// that can never resolve is reported before the first directory exists.
    pub fn preflight(&self, catalog: &Catalog, config: &RunConfig) -> KilnResult<()> {
        for descriptor in catalog {
            TemplateEngine::render(&self.template, &Self::context_for(descriptor, config))?;
        }
        Ok(())
    }
}

impl Emitter for InstructionsEmitter {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Instructions
    }

    fn compose(&self, input: &EmitInput<'_>) -> KilnResult<Emission> {
        let context = Self::context_for(input.descriptor, input.config);
        let text = TemplateEngine::render(&self.template, &context)?;
        Ok(Emission::Draft(ArtifactDraft::single(
            &input.config.instructions_file,
            text,
        )))
    }
}
