//! The one thing `kiln` does: generate every component in a catalog.
//!
//! Responsibility: resolve arguments and configuration into a catalog and a
//! `RunConfig`, wire the adapters, run the orchestrator and present the
//! report. No generation logic lives here.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use kiln_adapters::{
    FileTemplateStore, InMemoryTemplateStore, LocalFilesystem,
    builtin_catalog::{font_system_catalog, with_font_system_sections},
    builtin_templates::COMPONENT_GENERIC_NAME,
    default_serializer, load_catalog,
};
use kiln_core::{
    application::{Orchestrator, ports::TemplateStore},
    domain::{Catalog, RunConfig},
    error::KilnError,
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::{ConsoleObserver, OutputManager},
};

#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    let root = args
        .root
        .clone()
        .unwrap_or_else(|| config.project.root.clone());
    if root.exists() && !root.is_dir() {
        return Err(CliError::invalid_path(&root, "project root is not a directory"));
    }

    let (catalog, mut run_config) = resolve_catalog(args.catalog.as_deref(), &config, root.clone())?;
    if let Some(version) = &args.project_version {
        run_config = run_config.with_version(version.clone());
    }

    let templates: Box<dyn TemplateStore> = if args.builtin_template {
        run_config = run_config.with_instructions_template(COMPONENT_GENERIC_NAME);
        Box::new(InMemoryTemplateStore::with_builtin()?)
    } else {
        if let Some(template) = &args.template {
            run_config = run_config.with_instructions_template(template.clone());
        }
        Box::new(FileTemplateStore::new(root.clone()))
    };

    info!(
        root = %root.display(),
        components = catalog.len(),
        template = %run_config.instructions_template,
        "Generation started"
    );

    let orchestrator = Orchestrator::new(
        run_config,
        Box::new(LocalFilesystem::new()),
        templates,
        default_serializer(),
    );
    let mut observer = ConsoleObserver::new(output, &root);
    let report = orchestrator.run_with_observer(&catalog, &mut observer)?;

    output.report(&report, &root)?;

    info!(
        succeeded = report.succeeded(),
        processed = report.processed(),
        "Generation finished"
    );

    if args.strict && !report.is_clean() {
        return Err(CliError::PartialRun {
            failed: report.failures().len(),
            skipped: report.warnings().len(),
        });
    }
    Ok(())
}

/// The catalog to generate and the run configuration that goes with it.
///
/// A catalog file brings its own spec-section lookup; the built-in catalog
/// brings the font-system one. A configured spec document wins either way.
fn resolve_catalog(
    catalog_file: Option<&Path>,
    config: &AppConfig,
    root: PathBuf,
) -> CliResult<(Catalog, RunConfig)> {
    let base = config.to_run_config(root);

    match catalog_file {
        Some(path) => {
            let loaded = load_catalog(path)?;
            let run = loaded
                .spec_sections
                .into_iter()
                .fold(base, |run, (name, sections)| {
                    run.with_spec_sections(name, sections)
                });
            Ok((loaded.catalog, run))
        }
        None => {
            let catalog = font_system_catalog().map_err(KilnError::from)?;
            let mut run = with_font_system_sections(base);
            if let Some(doc) = &config.project.spec_document {
                run.spec_document = doc.clone();
            }
            Ok((catalog, run))
        }
    }
}
