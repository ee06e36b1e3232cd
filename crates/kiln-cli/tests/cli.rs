//! Integration tests for the `kiln` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use kiln_adapters::builtin_templates::COMPONENT_GENERIC;
use predicates::prelude::*;
use tempfile::TempDir;

const SCENARIO: &str = r#"
[[component]]
name = "core"
responsibility = "Shared types"
size_estimate = 8000

[[component]]
name = "api"
kind = "application"
responsibility = "Public API"
dependencies = ["core"]
size_estimate = 14000
"#;

fn kiln(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("kiln").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn project_with_template() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("templates")).unwrap();
    fs::write(
        dir.path().join("templates/component-generic.md"),
        COMPONENT_GENERIC,
    )
    .unwrap();
    fs::write(dir.path().join("catalog.toml"), SCENARIO).unwrap();
    dir
}

#[test]
fn help_describes_the_options() {
    let dir = TempDir::new().unwrap();
    kiln(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--catalog"))
        .stdout(predicate::str::contains("--strict"));
}

#[test]
fn no_color_set_to_one_still_generates() {
    let dir = TempDir::new().unwrap();
    kiln(dir.path())
        .env("NO_COLOR", "1")
        .arg("--builtin-template")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
    assert!(dir.path().join("components/font_types/Cargo.toml").is_file());
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    kiln(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn builtin_catalog_with_embedded_template() {
    let dir = TempDir::new().unwrap();
    kiln(dir.path())
        .args(["--builtin-template", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("font_system_api"))
        .stdout(predicate::str::contains("Total: 130000 est. tokens"));

    let components = dir.path().join("components");
    for name in [
        "font_types",
        "font_parser",
        "font_registry",
        "text_shaper",
        "glyph_renderer",
        "platform_integration",
        "font_system_api",
    ] {
        assert!(components.join(name).join("INSTRUCTIONS.md").is_file(), "{name}");
        assert!(components.join(name).join("Cargo.toml").is_file(), "{name}");
    }
}

#[test]
fn catalog_file_with_project_template() {
    let dir = project_with_template();
    kiln(dir.path())
        .args(["--catalog", "catalog.toml", "--root"])
        .arg(dir.path())
        .assert()
        .success();

    let api = dir.path().join("components/api");
    assert!(api.join("src/lib.rs").is_file());
    assert!(api.join("tests/contracts").is_dir());
    let instructions = fs::read_to_string(api.join("INSTRUCTIONS.md")).unwrap();
    assert!(instructions.contains("api"));
    assert!(!instructions.contains("{{"));
}

#[test]
fn root_defaults_to_current_directory() {
    let dir = project_with_template();
    kiln(dir.path())
        .args(["--catalog", "catalog.toml"])
        .assert()
        .success();
    assert!(dir.path().join("components/core/README.md").is_file());
}

#[test]
fn missing_template_exits_not_found_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("catalog.toml"), SCENARIO).unwrap();

    kiln(dir.path())
        .args(["--catalog", "catalog.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Error:"));

    assert!(!dir.path().join("components").exists());
}

#[test]
fn missing_catalog_file_exits_not_found() {
    let dir = TempDir::new().unwrap();
    kiln(dir.path())
        .args(["--builtin-template", "--catalog", "absent.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("absent.toml"));
}

#[test]
fn invalid_catalog_is_a_user_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("catalog.toml"),
        r#"
[[component]]
name = "core"
responsibility = "A"

[[component]]
name = "core"
responsibility = "B"
"#,
    )
    .unwrap();

    kiln(dir.path())
        .args(["--builtin-template", "--catalog", "catalog.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("more than once"));

    assert!(!dir.path().join("components").exists());
}

#[test]
fn component_failure_is_tolerated_unless_strict() {
    let dir = project_with_template();
    fs::create_dir(dir.path().join("components")).unwrap();
    fs::write(dir.path().join("components/core"), "not a directory").unwrap();

    kiln(dir.path())
        .args(["--catalog", "catalog.toml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("core failed"));
    assert!(dir.path().join("components/api/Cargo.toml").is_file());

    kiln(dir.path())
        .args(["--catalog", "catalog.toml", "--strict"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("1 component(s) failed"));
}

#[test]
fn json_output_is_the_run_report() {
    let dir = project_with_template();
    let assert = kiln(dir.path())
        .args(["--catalog", "catalog.toml", "--output-format", "json"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let components = report["components"].as_array().unwrap();
    assert_eq!(components.len(), 2);
    assert_eq!(components[0]["name"], "core");
    assert_eq!(components[1]["name"], "api");
    assert_eq!(components[1]["size_estimate"], 14000);
}

#[test]
fn config_file_sets_project_version() {
    let dir = project_with_template();
    fs::write(
        dir.path().join("kiln.toml"),
        "[project]\nversion = \"2.3.0\"\n",
    )
    .unwrap();

    kiln(dir.path())
        .args(["--catalog", "catalog.toml", "--config", "kiln.toml"])
        .assert()
        .success();

    let manifest = fs::read_to_string(dir.path().join("components/core/Cargo.toml")).unwrap();
    assert!(manifest.contains("version = \"2.3.0\""));
}

#[test]
fn missing_config_file_is_a_configuration_error() {
    let dir = project_with_template();
    kiln(dir.path())
        .args(["--catalog", "catalog.toml", "--config", "nope.toml"])
        .assert()
        .code(4);
}

#[test]
fn instructions_file_colliding_with_readme_is_rejected() {
    let dir = project_with_template();
    fs::write(
        dir.path().join("kiln.toml"),
        "[templates]\ninstructions_file = \"README.md\"\n",
    )
    .unwrap();

    kiln(dir.path())
        .args(["--catalog", "catalog.toml", "--config", "kiln.toml"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("README.md"));
    assert!(!dir.path().join("components").exists());
}

#[test]
fn reruns_leave_identical_files() {
    let dir = project_with_template();
    let readme = dir.path().join("components/api/README.md");

    kiln(dir.path())
        .args(["--catalog", "catalog.toml", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    let first = fs::read(&readme).unwrap();

    kiln(dir.path())
        .args(["--catalog", "catalog.toml", "--quiet"])
        .assert()
        .success();
    assert_eq!(first, fs::read(&readme).unwrap());
}
