//! Integration tests for kiln-core's public API, using hand-written port fakes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use kiln_core::prelude::*;

#[derive(Clone, Default)]
struct RecordingFs {
    dirs: Arc<Mutex<Vec<PathBuf>>>,
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl Filesystem for RecordingFs {
    fn create_dir_all(&self, path: &Path) -> KilnResult<()> {
        self.dirs.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> KilnResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.is_dir(path) || self.files.lock().unwrap().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().iter().any(|d| d == path)
    }
}

struct OneTemplate(&'static str);

impl TemplateStore for OneTemplate {
    fn load(&self, _name: &str) -> KilnResult<String> {
        Ok(self.0.to_string())
    }
}

fn scenario() -> Catalog {
    Catalog::new(vec![
        ComponentDescriptor::builder("core")
            .responsibility("Shared types")
            .build()
            .unwrap(),
        ComponentDescriptor::builder("api")
            .kind(ComponentKind::Application)
            .responsibility("Public API")
            .depends_on("core")
            .build()
            .unwrap(),
    ])
}

#[test]
fn test_run_without_serializer() {
    let disk = RecordingFs::default();
    let orchestrator = Orchestrator::new(
        RunConfig::new("/out"),
        Box::new(disk.clone()),
        Box::new(OneTemplate("{{COMPONENT_NAME}} depends on {{DEPENDENCIES}}")),
        None,
    );

    let report = orchestrator.run(&scenario()).unwrap();

    assert_eq!(report.succeeded(), 2);
    assert!(!report.is_clean());
    let files = disk.files.lock().unwrap();
    assert_eq!(
        files[Path::new("/out/components/api/INSTRUCTIONS.md")],
        "api depends on core"
    );
    assert_eq!(
        files[Path::new("/out/components/core/INSTRUCTIONS.md")],
        "core depends on None"
    );
    assert_eq!(files.len(), 2 * 5);
}

#[test]
fn test_directories_are_created_once() {
    let disk = RecordingFs::default();
    let orchestrator = Orchestrator::new(
        RunConfig::new("/out"),
        Box::new(disk.clone()),
        Box::new(OneTemplate("{{COMPONENT_NAME}}")),
        None,
    );

    orchestrator.run(&scenario()).unwrap();

    let dirs = disk.dirs.lock().unwrap();
    assert_eq!(dirs.len(), 2 * 6);
    assert!(dirs.contains(&PathBuf::from("/out/components/core/tests/contracts")));
}

#[test]
fn test_duplicate_names_are_rejected() {
    let dup = Catalog::new(vec![
        ComponentDescriptor::builder("core")
            .responsibility("A")
            .build()
            .unwrap(),
        ComponentDescriptor::builder("core")
            .responsibility("B")
            .build()
            .unwrap(),
    ]);
    let disk = RecordingFs::default();
    let orchestrator = Orchestrator::new(
        RunConfig::new("/out"),
        Box::new(disk.clone()),
        Box::new(OneTemplate("x")),
        None,
    );

    let err = orchestrator.run(&dup).unwrap_err();
    assert_eq!(err.tier(), FailureTier::RunFatal);
    assert!(disk.dirs.lock().unwrap().is_empty());
}
