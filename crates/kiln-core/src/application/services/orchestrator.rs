//! Orchestrator - drives a full generation run.
//!
//! ```text
//! Start -> Validate -> LoadTemplate -> { Materialize -> EmitAll } x N -> Done
//! ```
//!
//! Components are processed strictly in catalog order. Failures are isolated
//! by their [`FailureTier`]:
//!
//! - artifact-recoverable: the artifact is recorded as skipped, the remaining
//!   emitters still run
//! - component-fatal: the component is marked failed, the next one starts
//! - run-fatal: the run stops and the error is returned

use std::path::PathBuf;

use tracing::{info, instrument, warn};

use super::{
    DirectoryMaterializer, TemplateEngine,
    emitters::{
        BuildManifestEmitter, DocEmitter, EmitInput, Emission, Emitter, InstructionsEmitter,
        MachineManifestEmitter, SourceStubEmitter,
    },
};
use crate::{
    application::ports::{Filesystem, ManifestSerializer, NoopObserver, RunObserver, TemplateStore},
    domain::{
        ArtifactDraft, ArtifactOutcome, ArtifactRecord, Catalog, ComponentDescriptor,
        ComponentLayout, ComponentReport, ComponentStatus, DomainValidator, RunConfig, RunReport,
    },
    error::{FailureTier, KilnResult},
};

/// Main generation service.
pub struct Orchestrator {
    config: RunConfig,
    filesystem: Box<dyn Filesystem>,
    templates: Box<dyn TemplateStore>,
    serializer: Option<Box<dyn ManifestSerializer>>,
}

impl Orchestrator {
    /// Create an orchestrator with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use kiln_core::{application::Orchestrator, domain::RunConfig};
    ///
    /// let orchestrator = Orchestrator::new(
    ///     RunConfig::new("."),
    ///     filesystem, // impl Filesystem
    ///     templates,  // impl TemplateStore
    ///     None,       // no machine manifests
    /// );
    /// let report = orchestrator.run(&catalog)?;
    /// ```
    pub fn new(
        config: RunConfig,
        filesystem: Box<dyn Filesystem>,
        templates: Box<dyn TemplateStore>,
        serializer: Option<Box<dyn ManifestSerializer>>,
    ) -> Self {
        Self {
            config,
            filesystem,
            templates,
            serializer,
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run without progress reporting.
    pub fn run(&self, catalog: &Catalog) -> KilnResult<RunReport> {
        self.run_with_observer(catalog, &mut NoopObserver)
    }

    /// Run the whole catalog, pushing progress to `observer`.
    ///
    /// Returns `Err` only for run-fatal problems; everything else is in the
    /// report.
    #[instrument(
        skip_all,
        fields(
            components = catalog.len(),
            root = %self.config.project_root.display()
        )
    )]
    pub fn run_with_observer(
        &self,
        catalog: &Catalog,
        observer: &mut dyn RunObserver,
    ) -> KilnResult<RunReport> {
        // 1. Validate before touching anything
        DomainValidator::validate_run_config(&self.config)?;
        DomainValidator::validate_catalog(catalog)?;

        // 2. Load the shared template once and make sure it resolves
        let engine = TemplateEngine::new(self.templates.as_ref());
        let instructions = InstructionsEmitter::new(engine.load(&self.config.instructions_template)?);
        instructions.preflight(catalog, &self.config)?;

        let machine = MachineManifestEmitter::new(self.serializer.as_deref());
        if self.serializer.is_none() {
            warn!("no manifest serializer configured, machine manifests will be skipped");
        }
        let emitters: [&dyn Emitter; 5] = [
            &BuildManifestEmitter,
            &SourceStubEmitter,
            &DocEmitter,
            &machine,
            &instructions,
        ];

        // 3. Components, in declaration order
        observer.run_started(catalog.len());
        let mut report = RunReport::default();
        for descriptor in catalog {
            let component = self.process_component(descriptor, &emitters, observer)?;
            report.components.push(component);
        }

        info!(
            succeeded = report.succeeded(),
            failed = report.failures().len(),
            warnings = report.warnings().len(),
            "Run completed"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    #[instrument(skip_all, fields(component = %descriptor.name()))]
    fn process_component(
        &self,
        descriptor: &ComponentDescriptor,
        emitters: &[&dyn Emitter],
        observer: &mut dyn RunObserver,
    ) -> KilnResult<ComponentReport> {
        let name = descriptor.name();
        observer.component_started(name);

        let layout = self.config.layout_for(name);
        let mut report = ComponentReport::new(name, descriptor.size_estimate());

        if let Err(e) = self.emit_all(descriptor, &layout, emitters, &mut report, observer) {
            if e.tier() == FailureTier::RunFatal {
                return Err(e);
            }
            warn!(error = %e, "Component failed, continuing with the next one");
            observer.component_failed(name, &e);
            report.status = ComponentStatus::Failed {
                reason: e.to_string(),
            };
        }

        observer.component_finished(&report);
        Ok(report)
    }

    fn emit_all(
        &self,
        descriptor: &ComponentDescriptor,
        layout: &ComponentLayout,
        emitters: &[&dyn Emitter],
        report: &mut ComponentReport,
        observer: &mut dyn RunObserver,
    ) -> KilnResult<()> {
        DirectoryMaterializer::new(self.filesystem.as_ref()).ensure_layout(layout)?;

        let input = EmitInput {
            descriptor,
            layout,
            config: &self.config,
        };

        for emitter in emitters {
            let kind = emitter.kind();
            let outcome = match emitter.compose(&input) {
                Ok(Emission::Draft(draft)) => {
                    let files = self.write_draft(layout, &draft)?;
                    let paths: Vec<_> = files.iter().map(PathBuf::as_path).collect();
                    observer.artifact_written(descriptor.name(), kind, &paths);
                    ArtifactOutcome::Written { files }
                }
                Ok(Emission::Skipped(reason)) => {
                    warn!(artifact = %kind, %reason, "Artifact skipped");
                    observer.artifact_skipped(descriptor.name(), kind, &reason);
                    ArtifactOutcome::Skipped { reason }
                }
                Err(e) if e.tier() == FailureTier::ArtifactRecoverable => {
                    let reason = e.to_string();
                    warn!(artifact = %kind, %reason, "Artifact skipped");
                    observer.artifact_skipped(descriptor.name(), kind, &reason);
                    ArtifactOutcome::Skipped { reason }
                }
                Err(e) => return Err(e),
            };
            report.artifacts.push(ArtifactRecord { kind, outcome });
        }

        Ok(())
    }

    /// Write every file of a draft, each in a single replace-in-place step.
    fn write_draft(&self, layout: &ComponentLayout, draft: &ArtifactDraft) -> KilnResult<Vec<PathBuf>> {
        DomainValidator::validate_draft(draft)?;
        let materializer = DirectoryMaterializer::new(self.filesystem.as_ref());

        let mut written = Vec::with_capacity(draft.files().len());
        for file in draft.files() {
            let path = layout.resolve(&file.path);
            if let Some(parent) = path.parent() {
                materializer.ensure(parent)?;
            }
            self.filesystem.write_file(&path, &file.content)?;
            written.push(path);
        }
        Ok(written)
    }
}
