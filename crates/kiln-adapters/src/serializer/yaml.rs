//! YAML manifests via `serde_yaml`.

use kiln_core::{
    application::{ApplicationError, ports::ManifestSerializer},
    domain::MachineManifest,
    error::KilnResult,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlManifestSerializer;

impl YamlManifestSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestSerializer for YamlManifestSerializer {
    fn format_name(&self) -> &'static str {
        "yaml"
    }

    fn serialize(&self, manifest: &MachineManifest) -> KilnResult<String> {
        serde_yaml::to_string(manifest).map_err(|e| {
            ApplicationError::SerializationFailed {
                artifact: format!("{}/component.yaml", manifest.name),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::domain::{ComponentDescriptor, RunConfig, TechStack};

    #[test]
    fn emits_snake_case_keys_in_declared_order() {
        let descriptor = ComponentDescriptor::builder("text_shaper")
            .responsibility("Text shaping")
            .tech_stack(TechStack::parse("Rust, unicode-bidi"))
            .dependencies(["font_types", "font_parser"])
            .size_estimate(28000)
            .build()
            .unwrap();
        let manifest = MachineManifest::from_descriptor(&descriptor, &RunConfig::new("/p"));

        let yaml = YamlManifestSerializer::new().serialize(&manifest).unwrap();

        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(value["name"].as_str(), Some("text_shaper"));
        assert_eq!(value["kind"].as_str(), Some("library"));
        assert_eq!(value["size_estimate"].as_u64(), Some(28000));
        assert_eq!(value["tech_stack"][1].as_str(), Some("unicode-bidi"));
        assert_eq!(
            value["dependencies"][1]["import_path"].as_str(),
            Some("components.font_parser")
        );
        assert_eq!(value["dependencies"][0]["version_range"].as_str(), Some("^0.1.0"));
        assert!(value["exports"].as_sequence().unwrap().is_empty());

        let keys: Vec<_> = yaml
            .lines()
            .filter(|l| !l.starts_with(' ') && !l.starts_with('-'))
            .filter_map(|l| l.split(':').next())
            .collect();
        assert_eq!(
            keys,
            [
                "name",
                "version",
                "kind",
                "language",
                "tech_stack",
                "responsibility",
                "size_estimate",
                "dependencies",
                "exports"
            ]
        );
    }
}
