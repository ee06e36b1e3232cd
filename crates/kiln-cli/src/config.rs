//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and turned into the core
//! [`RunConfig`]; the core crate never sees the file or the environment.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied in `commands::generate`)
//! 2. `KILN__<SECTION>__<KEY>` environment variables (`.env` is honoured)
//! 3. The config file: `--config`, else `config.toml` in the platform config dir
//! 4. Built-in defaults
//!
//! ```toml
//! [project]
//! root = "."
//! version = "0.1.0"
//! components_dir = "components"
//! spec_document = "docs/specification.md"
//!
//! [templates]
//! instructions = "templates/component-generic.md"
//! instructions_file = "INSTRUCTIONS.md"
//!
//! [package]
//! edition = "2021"
//! authors = ["Kiln Contributors"]
//! license = "MIT OR Apache-2.0"
//!
//! [output]
//! no_color = false
//! format = "auto"
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use kiln_core::domain::{PackageDefaults, RunConfig};
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub project: ProjectConfig,
    pub templates: TemplateConfig,
    pub package: PackageConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub root: PathBuf,
    pub version: String,
    pub components_dir: String,
    /// Overrides the document the built-in catalog points at.
    pub spec_document: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        let run = RunConfig::new(".");
        Self {
            root: run.project_root,
            version: run.project_version,
            components_dir: run.components_dir,
            spec_document: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub instructions: String,
    pub instructions_file: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        let run = RunConfig::new(".");
        Self {
            instructions: run.instructions_template,
            instructions_file: run.instructions_file,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    pub edition: String,
    pub authors: Vec<String>,
    pub license: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        let defaults = PackageDefaults::default();
        Self {
            edition: defaults.edition,
            authors: defaults.authors,
            license: defaults.license,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl OutputConfig {
    /// The configured format; unknown names fall back to auto-detection.
    pub fn format(&self) -> OutputFormat {
        <OutputFormat as clap::ValueEnum>::from_str(&self.format, true).unwrap_or_default()
    }
}

impl AppConfig {
    /// Load configuration from file and environment on top of the defaults.
    ///
    /// An explicitly given file must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Environment::with_prefix("KILN"))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                env.prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("package.authors"),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.kiln.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "kiln", "kiln")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".kiln.toml"))
    }

    /// Core run configuration rooted at `root`.
    pub fn to_run_config(&self, root: PathBuf) -> RunConfig {
        let mut run = RunConfig::new(root)
            .with_version(self.project.version.clone())
            .with_instructions_template(self.templates.instructions.clone());
        run.components_dir = self.project.components_dir.clone();
        run.instructions_file = self.templates.instructions_file.clone();
        run.package = PackageDefaults {
            edition: self.package.edition.clone(),
            authors: self.package.authors.clone(),
            license: self.package.license.clone(),
        };
        if let Some(doc) = &self.project.spec_document {
            run.spec_document = doc.clone();
        }
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    fn no_env() -> Environment {
        Environment::with_prefix("KILN").source(Some(HashMap::new()))
    }

    #[test]
    fn defaults_match_core_defaults() {
        let cfg = AppConfig::default();
        let run = cfg.to_run_config(PathBuf::from("/p"));
        assert_eq!(run, RunConfig::new("/p"));
        assert_eq!(cfg.output.format(), OutputFormat::Auto);
    }

    #[test]
    fn missing_optional_file_returns_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&dir.path().join("absent.toml"), false, no_env()).unwrap();
        assert_eq!(cfg.project.version, "0.1.0");
        assert_eq!(cfg.templates.instructions_file, "INSTRUCTIONS.md");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(AppConfig::load_from(&dir.path().join("absent.toml"), true, no_env()).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("kiln.toml");
        fs::write(
            &path,
            "[project]\nversion = \"2.1.0\"\nspec_document = \"docs/spec.md\"\n\n[templates]\ninstructions_file = \"AGENTS.md\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true, no_env()).unwrap();
        let run = cfg.to_run_config(PathBuf::from("/p"));
        assert_eq!(run.project_version, "2.1.0");
        assert_eq!(run.instructions_file, "AGENTS.md");
        assert_eq!(run.spec_document, "docs/spec.md");
        assert_eq!(run.components_dir, "components");
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("kiln.toml");
        fs::write(&path, "[project]\nversion = \"2.1.0\"\n").unwrap();

        let env = Environment::with_prefix("KILN").source(Some(HashMap::from([
            ("KILN__PROJECT__VERSION".to_string(), "3.0.0".to_string()),
            ("KILN__OUTPUT__FORMAT".to_string(), "json".to_string()),
        ])));
        let cfg = AppConfig::load_from(&path, true, env).unwrap();
        assert_eq!(cfg.project.version, "3.0.0");
        assert_eq!(cfg.output.format(), OutputFormat::Json);
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
