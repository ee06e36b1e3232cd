use tracing::debug;

use super::{EmitInput, Emission, Emitter};
use crate::{
    application::ports::ManifestSerializer,
    domain::{ArtifactDraft, ArtifactKind, MachineManifest},
    error::KilnResult,
};

pub const MACHINE_MANIFEST_FILE: &str = "component.yaml";

/// Machine-readable manifest, written through the optional serializer port.
pub struct MachineManifestEmitter<'a> {
    serializer: Option<&'a dyn ManifestSerializer>,
}

impl<'a> MachineManifestEmitter<'a> {
    pub fn new(serializer: Option<&'a dyn ManifestSerializer>) -> Self {
        Self { serializer }
    }
}

impl Emitter for MachineManifestEmitter<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::MachineManifest
    }

    fn compose(&self, input: &EmitInput<'_>) -> KilnResult<Emission> {
        let Some(serializer) = self.serializer else {
            return Ok(Emission::Skipped(
                "no structured serializer available".to_string(),
            ));
        };

        let manifest = MachineManifest::from_descriptor(input.descriptor, input.config);
        let text = serializer.serialize(&manifest)?;
        debug!(
            format = serializer.format_name(),
            component = %manifest.name,
            "manifest serialized"
        );
        Ok(Emission::Draft(ArtifactDraft::single(
            MACHINE_MANIFEST_FILE,
            text,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockManifestSerializer};
    use crate::application::services::emitters::fixtures;
    use crate::error::{FailureTier, KilnError};

    fn compose(emitter: &MachineManifestEmitter<'_>) -> KilnResult<Emission> {
        let descriptor = fixtures::descriptor();
        let config = fixtures::config();
        let layout = config.layout_for(descriptor.name());
        emitter.compose(&EmitInput {
            descriptor: &descriptor,
            layout: &layout,
            config: &config,
        })
    }

    #[test]
    fn skips_without_serializer() {
        let emission = compose(&MachineManifestEmitter::new(None)).unwrap();
        assert!(matches!(emission, Emission::Skipped(_)));
    }

    #[test]
    fn serializes_descriptor_manifest() {
        let mut serializer = MockManifestSerializer::new();
        serializer.expect_format_name().return_const("fake");
        serializer
            .expect_serialize()
            .withf(|m: &MachineManifest| {
                m.name == "font_parser"
                    && m.dependencies.len() == 1
                    && m.dependencies[0].import_path == "components.font_types"
            })
            .returning(|m| Ok(format!("name: {}\n", m.name)));

        let emission = compose(&MachineManifestEmitter::new(Some(&serializer))).unwrap();
        let Emission::Draft(draft) = emission else {
            panic!("expected a draft");
        };
        assert_eq!(draft.files()[0].path.to_string(), MACHINE_MANIFEST_FILE);
        assert_eq!(draft.files()[0].content, "name: font_parser\n");
    }

    #[test]
    fn serializer_failure_is_recoverable() {
        let mut serializer = MockManifestSerializer::new();
        serializer.expect_serialize().returning(|_| {
            Err(KilnError::from(ApplicationError::SerializationFailed {
                artifact: "component.yaml".into(),
                reason: "bad".into(),
            }))
        });

        let err = compose(&MachineManifestEmitter::new(Some(&serializer))).unwrap_err();
        assert_eq!(err.tier(), FailureTier::ArtifactRecoverable);
    }
}
