use serde::Serialize;

use crate::domain::{
    entities::{descriptor::ComponentDescriptor, run_config::RunConfig},
    value_objects::{ComponentKind, TechStack},
};

/// Machine-readable description of one generated component.
///
/// Field order here is the field order in the serialized file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MachineManifest {
    pub name: String,
    pub version: String,
    pub kind: ComponentKind,
    pub language: String,
    pub tech_stack: TechStack,
    pub responsibility: String,
    pub size_estimate: u32,
    pub dependencies: Vec<DependencyRef>,
    pub exports: Vec<String>,
}

/// How a component imports one of its dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyRef {
    pub name: String,
    pub version_range: String,
    pub import_path: String,
}

impl DependencyRef {
    pub fn import_path_for(name: &str) -> String {
        format!("components.{name}")
    }
}

impl MachineManifest {
    pub fn from_descriptor(descriptor: &ComponentDescriptor, config: &RunConfig) -> Self {
        let version_range = config.version_range();
        Self {
            name: descriptor.name().to_string(),
            version: config.project_version.clone(),
            kind: descriptor.kind(),
            language: config.tooling.language.clone(),
            tech_stack: descriptor.tech_stack().clone(),
            responsibility: descriptor.responsibility().to_string(),
            size_estimate: descriptor.size_estimate(),
            dependencies: descriptor
                .dependencies()
                .iter()
                .map(|dep| DependencyRef {
                    name: dep.clone(),
                    version_range: version_range.clone(),
                    import_path: DependencyRef::import_path_for(dep),
                })
                .collect(),
            exports: Vec::new(),
        }
    }
}
