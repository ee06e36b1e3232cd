use super::{EmitInput, Emission, Emitter};
use crate::{
    domain::{ArtifactDraft, ArtifactKind},
    error::KilnResult,
};

pub const README_FILE: &str = "README.md";

/// Human-readable `README.md`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocEmitter;

impl Emitter for DocEmitter {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Readme
    }

    fn compose(&self, input: &EmitInput<'_>) -> KilnResult<Emission> {
        let descriptor = input.descriptor;
        let config = input.config;
        let instructions = &config.instructions_file;

        let dependencies = if descriptor.is_base() {
            "None (base component)".to_string()
        } else {
            descriptor
                .dependencies()
                .iter()
                .map(|d| format!("- {d}"))
                .collect::<Vec<_>>()
                .join("\n")
        };

        let tech_stack = if descriptor.tech_stack().is_empty() {
            "Unspecified".to_string()
        } else {
            descriptor.tech_stack().to_string()
        };

        let readme = format!(
            "# {name}

**Type**: {kind}
**Tech Stack**: {tech_stack}
**Version**: {version}

## Responsibility

{responsibility}

## Structure

```
├── src/           # Source code
├── tests/         # Tests (unit, integration, contracts)
├── benches/       # Benchmarks
├── Cargo.toml     # Rust package manifest
├── component.yaml # Machine-readable manifest
├── {instructions:<14} # Component-specific development instructions
└── README.md      # This file
```

## Dependencies

{dependencies}

## Development

See {instructions} for detailed development instructions and quality standards.

### Build and Test

```bash
# Build
cargo build

# Run tests
cargo test

# Run benchmarks
cargo bench

# Check code
{lint}

# Format code
{formatter}
```

## Architecture

Implementation details follow the specification in `{spec}`.
",
            name = descriptor.name(),
            kind = descriptor.kind(),
            version = config.project_version,
            responsibility = descriptor.responsibility(),
            lint = config.tooling.lint_command,
            formatter = config.tooling.formatter,
            spec = config.spec_document_path().display(),
        );

        Ok(Emission::Draft(ArtifactDraft::single(README_FILE, readme)))
    }
}
