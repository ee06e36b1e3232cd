use super::{EmitInput, Emission, Emitter};
use crate::{
    domain::{ArtifactDraft, ArtifactKind},
    error::KilnResult,
};

pub const BUILD_MANIFEST_FILE: &str = "Cargo.toml";

/// `Cargo.toml` with package metadata, an empty dependency table and the
/// standard dev-dependencies.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuildManifestEmitter;

impl Emitter for BuildManifestEmitter {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::BuildManifest
    }

    fn compose(&self, input: &EmitInput<'_>) -> KilnResult<Emission> {
        let descriptor = input.descriptor;
        let package = &input.config.package;
        let name = descriptor.name();

        let authors = package
            .authors
            .iter()
            .map(String::as_str)
            .map(toml_string)
            .collect::<Vec<_>>()
            .join(", ");

        let out = format!(
            "[package]\n\
             name = {name}\n\
             version = {version}\n\
             edition = {edition}\n\
             authors = [{authors}]\n\
             license = {license}\n\
             description = {description}\n\
             \n\
             [dependencies]\n\
             # Add dependencies based on component needs\n\
             \n\
             [dev-dependencies]\n\
             criterion = \"0.5\"\n\
             proptest = \"1.4\"\n\
             test-case = \"3.1\"\n\
             \n\
             [lib]\n\
             name = {lib_name}\n\
             path = \"src/lib.rs\"\n\
             \n\
             [[bench]]\n\
             name = \"benchmarks\"\n\
             harness = false\n",
            name = toml_string(name),
            version = toml_string(&input.config.project_version),
            edition = toml_string(&package.edition),
            license = toml_string(&package.license),
            description = toml_string(descriptor.responsibility()),
            lib_name = toml_string(&name.replace('-', "_")),
        );

        Ok(Emission::Draft(ArtifactDraft::single(BUILD_MANIFEST_FILE, out)))
    }
}

/// Basic TOML string with the mandatory escapes applied.
fn toml_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::emitters::fixtures;
    use crate::domain::ComponentDescriptor;

    fn compose(descriptor: &ComponentDescriptor) -> String {
        let config = fixtures::config();
        let layout = config.layout_for(descriptor.name());
        let input = EmitInput {
            descriptor,
            layout: &layout,
            config: &config,
        };
        match BuildManifestEmitter.compose(&input).unwrap() {
            Emission::Draft(draft) => draft.files()[0].content.clone(),
            Emission::Skipped(reason) => panic!("skipped: {reason}"),
        }
    }

    #[test]
    fn package_section_carries_descriptor_and_defaults() {
        let text = compose(&fixtures::descriptor());
        assert!(text.starts_with("[package]\nname = \"font_parser\"\nversion = \"0.1.0\"\n"));
        assert!(text.contains("edition = \"2021\""));
        assert!(text.contains("authors = [\"Kiln Contributors\"]"));
        assert!(text.contains(
            "description = \"Parse OpenType, TrueType, WOFF, and WOFF2 font files\""
        ));
        assert!(text.contains("[[bench]]\nname = \"benchmarks\"\nharness = false\n"));
    }

    #[test]
    fn description_is_escaped() {
        let d = ComponentDescriptor::builder("quoted")
            .responsibility("Handles \"quoted\" C:\\paths")
            .build()
            .unwrap();
        let text = compose(&d);
        assert!(text.contains(r#"description = "Handles \"quoted\" C:\\paths""#));
    }

    #[test]
    fn lib_name_uses_underscores() {
        let d = ComponentDescriptor::builder("glyph-cache")
            .responsibility("Caches glyphs")
            .build()
            .unwrap();
        let text = compose(&d);
        assert!(text.contains("name = \"glyph-cache\""));
        assert!(text.contains("[lib]\nname = \"glyph_cache\""));
    }

    #[test]
    fn control_characters_use_unicode_escapes() {
        assert_eq!(toml_string("a\u{7}b"), "\"a\\u0007b\"");
    }
}
