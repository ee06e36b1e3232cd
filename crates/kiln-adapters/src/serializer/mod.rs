//! Manifest serializer adapters.

#[cfg(feature = "yaml")]
mod yaml;

#[cfg(feature = "yaml")]
pub use yaml::YamlManifestSerializer;

use kiln_core::application::ports::ManifestSerializer;

/// The serializer this build supports, if any.
///
/// `None` when the `yaml` feature is disabled; the orchestrator then skips
/// machine manifests with a warning.
pub fn default_serializer() -> Option<Box<dyn ManifestSerializer>> {
    #[cfg(feature = "yaml")]
    {
        Some(Box::new(YamlManifestSerializer::new()))
    }
    #[cfg(not(feature = "yaml"))]
    {
        tracing::debug!("built without the yaml feature, no manifest serializer");
        None
    }
}
