//! The catalog used when no catalog file is given: a seven-component font
//! system, with the specification sections each component is built from.

use kiln_core::domain::{
    Catalog, ComponentDescriptor, ComponentKind, DomainError, RunConfig, TechStack,
};

struct Entry {
    name: &'static str,
    kind: ComponentKind,
    responsibility: &'static str,
    tech_stack: &'static str,
    dependencies: &'static [&'static str],
    size_estimate: u32,
    spec_sections: &'static [&'static str],
}

const FONT_SYSTEM: &[Entry] = &[
    Entry {
        name: "font_types",
        kind: ComponentKind::Library,
        responsibility: "Common types, traits, enums, and interfaces for the font system",
        tech_stack: "Rust",
        dependencies: &[],
        size_estimate: 8000,
        spec_sections: &[
            "Core Types (lines 91-235)",
            "Public API Specification (lines 237-295)",
        ],
    },
    Entry {
        name: "font_parser",
        kind: ComponentKind::Library,
        responsibility: "Parse OpenType, TrueType, WOFF, and WOFF2 font files",
        tech_stack: "Rust, ttf-parser, byteorder",
        dependencies: &["font_types"],
        size_estimate: 24000,
        spec_sections: &[
            "Phase 2: Font Parser Implementation (lines 387-438)",
            "OpenType Parser (lines 390-438)",
        ],
    },
    Entry {
        name: "font_registry",
        kind: ComponentKind::Library,
        responsibility: "Font discovery, loading, caching, and font matching algorithms",
        tech_stack: "Rust, fontconfig (Linux)",
        dependencies: &["font_types"],
        size_estimate: 22000,
        spec_sections: &["Font Registry (lines 42-46)", "Font Matching (lines 47)"],
    },
    Entry {
        name: "text_shaper",
        kind: ComponentKind::Library,
        responsibility: "Text shaping, bidirectional text, line breaking, and OpenType features",
        tech_stack: "Rust, harfbuzz_rs (initial), unicode-bidi",
        dependencies: &["font_types", "font_parser", "font_registry"],
        size_estimate: 28000,
        spec_sections: &[
            "Phase 3: Text Shaping Engine (lines 440-505)",
            "Harfbuzz Integration (lines 357-385)",
        ],
    },
    Entry {
        name: "glyph_renderer",
        kind: ComponentKind::Library,
        responsibility: "Glyph rasterization, hinting, subpixel rendering, and glyph caching",
        tech_stack: "Rust, freetype-rs (initial)",
        dependencies: &["font_types", "font_parser"],
        size_estimate: 22000,
        spec_sections: &["Phase 4: Rasterization Engine (lines 507-580)"],
    },
    Entry {
        name: "platform_integration",
        kind: ComponentKind::Library,
        responsibility: "Platform-specific font discovery (Linux, Windows, macOS)",
        tech_stack: "Rust, fontconfig, dwrote, core-text",
        dependencies: &["font_types", "font_registry"],
        size_estimate: 12000,
        spec_sections: &["Phase 5: Platform Integration (lines 582-628)"],
    },
    Entry {
        name: "font_system_api",
        kind: ComponentKind::Application,
        responsibility: "Public API and orchestration layer for the complete font system",
        tech_stack: "Rust",
        dependencies: &[
            "font_types",
            "font_parser",
            "font_registry",
            "text_shaper",
            "glyph_renderer",
            "platform_integration",
        ],
        size_estimate: 14000,
        spec_sections: &[
            "Main API Interface (lines 238-295)",
            "Browser Integration Interface (lines 297-354)",
        ],
    },
];

/// Specification document the built-in sections point into.
pub const FONT_SYSTEM_SPEC_DOCUMENT: &str = "font-system-specification.md";

/// The built-in font-system catalog, in processing order.
pub fn font_system_catalog() -> Result<Catalog, DomainError> {
    FONT_SYSTEM
        .iter()
        .map(|e| {
            ComponentDescriptor::builder(e.name)
                .kind(e.kind)
                .responsibility(e.responsibility)
                .tech_stack(TechStack::parse(e.tech_stack))
                .dependencies(e.dependencies.iter().copied())
                .size_estimate(e.size_estimate)
                .build()
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Catalog::new)
}

/// Register the built-in spec-section lookup on `config`.
pub fn with_font_system_sections(mut config: RunConfig) -> RunConfig {
    for entry in FONT_SYSTEM {
        config = config.with_spec_sections(entry.name, entry.spec_sections.iter().copied());
    }
    config.spec_document = FONT_SYSTEM_SPEC_DOCUMENT.to_string();
    config
}
