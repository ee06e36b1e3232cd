//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases
//! and help text. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
///
/// Kiln has a single job, so there are no subcommands: running `kiln` with no
/// arguments generates the built-in catalog under the current directory.
#[derive(Debug, Parser)]
#[command(
    name    = "kiln",
    bin_name = "kiln",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate per-component skeletons from a component catalog",
    long_about = "Kiln reads a catalog of components and writes, for each one, a \
                  directory with a build manifest, source stubs, a README, a \
                  machine-readable manifest and a rendered instructions file.",
    after_help = "EXAMPLES:\n\
        \x20 kiln\n\
        \x20 kiln --root ./project --catalog components.toml\n\
        \x20 kiln --builtin-template --strict\n\
        \x20 kiln --output-format json > report.json"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// What to generate and where.
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Project root; `components/` is created beneath it.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Project root directory (default: current directory)"
    )]
    pub root: Option<PathBuf>,

    /// TOML catalog file. Without it the built-in font-system catalog is used.
    #[arg(
        long = "catalog",
        value_name = "FILE",
        help = "Component catalog (TOML)"
    )]
    pub catalog: Option<PathBuf>,

    /// Instruction template, resolved relative to the project root.
    #[arg(
        short = 't',
        long = "template",
        value_name = "PATH",
        conflicts_with = "builtin_template",
        help = "Instruction template path"
    )]
    pub template: Option<String>,

    /// Use the instruction template compiled into the binary.
    #[arg(
        long = "builtin-template",
        help = "Use the embedded instruction template"
    )]
    pub builtin_template: bool,

    #[arg(
        long = "project-version",
        value_name = "VERSION",
        help = "Version stamped into every generated manifest"
    )]
    pub project_version: Option<String>,

    /// Treat skipped artifacts and failed components as a failed run.
    #[arg(long = "strict", help = "Exit non-zero if anything was skipped or failed")]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["kiln"]).unwrap();
        assert!(cli.generate.root.is_none());
        assert!(cli.generate.catalog.is_none());
        assert!(!cli.generate.strict);
        assert_eq!(cli.global.output_format, None);
    }

    #[test]
    fn parse_full_invocation() {
        let cli = Cli::parse_from([
            "kiln",
            "--root",
            "/tmp/p",
            "--catalog",
            "catalog.toml",
            "--template",
            "templates/custom.md",
            "--project-version",
            "2.0.0",
            "--strict",
            "--output-format",
            "json",
            "-vv",
        ]);
        assert_eq!(cli.generate.root, Some(PathBuf::from("/tmp/p")));
        assert_eq!(cli.generate.template.as_deref(), Some("templates/custom.md"));
        assert_eq!(cli.generate.project_version.as_deref(), Some("2.0.0"));
        assert!(cli.generate.strict);
        assert_eq!(cli.global.output_format, Some(OutputFormat::Json));
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn template_and_builtin_template_conflict() {
        let result = Cli::try_parse_from(["kiln", "--template", "x.md", "--builtin-template"]);
        assert!(result.is_err());
    }

    #[test]
    fn no_color_env_accepts_conventional_values() {
        unsafe { std::env::set_var("NO_COLOR", "1") };
        assert!(Cli::try_parse_from(["kiln"]).unwrap().global.no_color);

        unsafe { std::env::set_var("NO_COLOR", "0") };
        assert!(!Cli::try_parse_from(["kiln"]).unwrap().global.no_color);

        unsafe { std::env::remove_var("NO_COLOR") };
        assert!(Cli::try_parse_from(["kiln", "--no-color"]).unwrap().global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["kiln", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }
}
