//! Artifact emitters.
//!
//! An emitter composes one category of artifact for one component entirely in
//! memory. Writing is left to the orchestrator, so emitters never touch the
//! filesystem and are trivially testable.

mod build_manifest;
mod doc;
mod instructions;
mod machine_manifest;
mod source_stub;

pub use build_manifest::BuildManifestEmitter;
pub use doc::DocEmitter;
pub use instructions::{ADDITIONAL_INSTRUCTIONS_HEADING, InstructionsEmitter};
pub use machine_manifest::{MACHINE_MANIFEST_FILE, MachineManifestEmitter};
pub use source_stub::SourceStubEmitter;

use crate::{
    domain::{ArtifactDraft, ArtifactKind, ComponentDescriptor, ComponentLayout, RunConfig},
    error::KilnResult,
};

/// Everything an emitter may look at.
#[derive(Debug, Clone, Copy)]
pub struct EmitInput<'a> {
    pub descriptor: &'a ComponentDescriptor,
    pub layout: &'a ComponentLayout,
    pub config: &'a RunConfig,
}

/// Result of composing one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    Draft(ArtifactDraft),
    /// Nothing to write; the reason ends up as a warning in the report.
    Skipped(String),
}

pub trait Emitter {
    fn kind(&self) -> ArtifactKind;

    fn compose(&self, input: &EmitInput<'_>) -> KilnResult<Emission>;
}

/// Prefix every line with `prefix`, keeping empty lines free of trailing
/// whitespace.
pub(crate) fn prefix_lines(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                prefix.trim_end().to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domain::{ComponentDescriptor, ComponentKind, RunConfig, TechStack};

    pub fn descriptor() -> ComponentDescriptor {
        ComponentDescriptor::builder("font_parser")
            .responsibility("Parse OpenType, TrueType, WOFF, and WOFF2 font files")
            .tech_stack(TechStack::parse("Rust, ttf-parser, byteorder"))
            .depends_on("font_types")
            .size_estimate(24000)
            .build()
            .unwrap()
    }

    pub fn base_descriptor() -> ComponentDescriptor {
        ComponentDescriptor::builder("font_types")
            .kind(ComponentKind::Library)
            .responsibility("Common types")
            .tech_stack(TechStack::parse("Rust"))
            .size_estimate(8000)
            .build()
            .unwrap()
    }

    pub fn config() -> RunConfig {
        RunConfig::new("/work/fonts").with_spec_sections("font_parser", ["OpenType Parser"])
    }
}
