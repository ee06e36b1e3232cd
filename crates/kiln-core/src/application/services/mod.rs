//! Application services - orchestrate use cases.
//!
//! The orchestrator is the only entry point callers need; the materializer,
//! template engine and emitters are exposed for reuse and testing.

pub mod emitters;
pub mod materializer;
pub mod orchestrator;
pub mod template_engine;

pub use emitters::{
    BuildManifestEmitter, DocEmitter, EmitInput, Emission, Emitter, InstructionsEmitter,
    MachineManifestEmitter, SourceStubEmitter,
};
pub use materializer::DirectoryMaterializer;
pub use orchestrator::Orchestrator;
pub use template_engine::TemplateEngine;
