use super::{EmitInput, Emission, Emitter, prefix_lines};
use crate::{
    domain::{ArtifactDraft, ArtifactKind},
    error::KilnResult,
};

/// `src/lib.rs` and `src/types.rs` stubs.
///
/// Library and application components get the same crate root; the
/// generated code is a starting point, not something the generator checks.
#[derive(Debug, Default, Clone, Copy)]
pub struct SourceStubEmitter;

impl Emitter for SourceStubEmitter {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::SourceStub
    }

    fn compose(&self, input: &EmitInput<'_>) -> KilnResult<Emission> {
        let name = input.descriptor.name();
        let header = prefix_lines(
            &format!("{name} - {}", input.descriptor.responsibility()),
            "//! ",
        );

        let lib_rs = format!(
            "{header}

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Module exports will be added during implementation
pub mod types;

#[cfg(test)]
mod tests {{
    #[test]
    fn crate_builds() {{
        // Replace with real tests as the component grows.
        assert_eq!(2 + 2, 4);
    }}
}}
"
        );

        let types_rs = format!(
            "//! Common types for {name}

// Type definitions will be added during implementation
"
        );

        Ok(Emission::Draft(
            ArtifactDraft::new()
                .with_file("src/lib.rs", lib_rs)
                .with_file("src/types.rs", types_rs),
        ))
    }
}
