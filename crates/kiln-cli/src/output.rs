//! Output management and formatting.
//!
//! Progress and the final summary go to stdout; errors go to stderr. In JSON
//! mode stdout carries nothing but the report document.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::debug;

use kiln_core::{
    application::ports::RunObserver,
    domain::{ArtifactKind, ComponentReport, RunReport},
    error::KilnError,
};

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
    err_term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = args.output_format.unwrap_or_else(|| config.output.format());
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    /// Human-oriented lines are dropped when quiet or when stdout is JSON.
    fn silent(&self) -> bool {
        self.quiet || self.resolved_format == OutputFormat::Json
    }

    fn styled(&self, symbol: &str, msg: &str, style: fn(&str) -> String) -> String {
        if self.no_color {
            format!("{symbol} {msg}")
        } else {
            style(&format!("{symbol} {msg}"))
        }
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓ <msg>`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = self.styled("\u{2713}", msg, |s| s.green().to_string());
        self.term.write_line(&line)
    }

    /// `✗ <msg>` on stderr; never suppressed.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = self.styled("\u{2717}", msg, |s| s.red().bold().to_string());
        self.err_term.write_line(&line)
    }

    /// `⚠ <msg>`
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = self.styled("\u{26a0}", msg, |s| s.yellow().to_string());
        self.term.write_line(&line)
    }

    /// `ℹ <msg>`
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = self.styled("\u{2139}", msg, |s| s.blue().to_string());
        self.term.write_line(&line)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty-printed JSON on stdout, regardless of quiet mode.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// The final report: a JSON document, or the human summary.
    pub fn report(&self, report: &RunReport, root: &Path) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            return self.json(report);
        }

        self.print("")?;
        if report.failures().is_empty() {
            self.success(&format!(
                "{} of {} components generated under {}",
                report.succeeded(),
                report.processed(),
                root.display()
            ))?;
        } else {
            // Failures stay visible even with --quiet.
            self.error(&format!(
                "{} of {} components generated; {} failed",
                report.succeeded(),
                report.processed(),
                report.failures().len()
            ))?;
            for failure in report.failures() {
                self.error(&format!("  {failure}"))?;
            }
        }

        let warnings = report.warnings();
        if !warnings.is_empty() {
            self.warning(&format!("{} artifact(s) skipped:", warnings.len()))?;
            for warning in &warnings {
                self.print(&format!("  - {warning}"))?;
            }
        }

        self.print("")?;
        self.header("Components:")?;
        for component in &report.components {
            let marker = if component.is_failed() { " (failed)" } else { "" };
            self.print(&format!(
                "  - {} ({} est. tokens){marker}",
                component.name, component.size_estimate
            ))?;
        }
        self.print(&format!(
            "  Total: {} est. tokens",
            report.total_size_estimate()
        ))
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }
}

/// Prints per-component and per-artifact progress as the run happens.
pub struct ConsoleObserver<'a> {
    output: &'a OutputManager,
    root: PathBuf,
    total: usize,
    index: usize,
}

impl<'a> ConsoleObserver<'a> {
    pub fn new(output: &'a OutputManager, root: impl Into<PathBuf>) -> Self {
        Self {
            output,
            root: root.into(),
            total: 0,
            index: 0,
        }
    }

    /// Paths relative to the project root when possible.
    fn display_paths(&self, files: &[&Path]) -> String {
        files
            .iter()
            .map(|f| f.strip_prefix(&self.root).unwrap_or(*f).display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn emit(result: io::Result<()>) {
        if let Err(e) = result {
            debug!(error = %e, "progress output failed");
        }
    }
}

impl RunObserver for ConsoleObserver<'_> {
    fn run_started(&mut self, components: usize) {
        self.total = components;
        Self::emit(
            self.output
                .header(&format!("Generating {components} component(s)...")),
        );
    }

    fn component_started(&mut self, name: &str) {
        self.index += 1;
        Self::emit(self.output.print(""));
        Self::emit(
            self.output
                .info(&format!("[{}/{}] {name}", self.index, self.total)),
        );
    }

    fn artifact_written(&mut self, _component: &str, kind: ArtifactKind, files: &[&Path]) {
        let line = format!("  {kind}: {}", self.display_paths(files));
        Self::emit(self.output.success(&line));
    }

    fn artifact_skipped(&mut self, _component: &str, kind: ArtifactKind, reason: &str) {
        Self::emit(self.output.warning(&format!("  {kind} skipped: {reason}")));
    }

    fn component_failed(&mut self, component: &str, error: &KilnError) {
        Self::emit(self.output.error(&format!("{component} failed: {error}")));
    }

    fn component_finished(&mut self, report: &ComponentReport) {
        debug!(
            component = %report.name,
            written = report.written_files().count(),
            "component finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use kiln_core::domain::{ArtifactOutcome, ArtifactRecord, ComponentStatus};

    fn make_manager(quiet: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color: false,
            config: None,
            output_format: Some(format),
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn sample_report() -> RunReport {
        let mut ok = ComponentReport::new("core", 8000);
        ok.artifacts.push(ArtifactRecord {
            kind: ArtifactKind::MachineManifest,
            outcome: ArtifactOutcome::Skipped {
                reason: "no structured serializer available".into(),
            },
        });
        let mut failed = ComponentReport::new("api", 14000);
        failed.status = ComponentStatus::Failed {
            reason: "permission denied".into(),
        };
        RunReport {
            components: vec![ok, failed],
        }
    }

    #[test]
    fn plain_format_disables_color() {
        assert!(!make_manager(false, OutputFormat::Plain).supports_color());
        assert!(make_manager(false, OutputFormat::Human).supports_color());
    }

    #[test]
    fn config_format_applies_without_flag() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: None,
        };
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        assert_eq!(
            OutputManager::new(&args, &config).resolved_format,
            OutputFormat::Json
        );
    }

    #[test]
    fn json_mode_silences_progress() {
        let out = make_manager(false, OutputFormat::Json);
        assert!(out.silent());
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn quiet_mode_still_reports() {
        let out = make_manager(true, OutputFormat::Plain);
        assert!(out.quiet);
        assert!(out.report(&sample_report(), Path::new("/p")).is_ok());
    }

    #[test]
    fn observer_shows_paths_relative_to_root() {
        let out = make_manager(true, OutputFormat::Plain);
        let observer = ConsoleObserver::new(&out, "/p");
        let shown = observer.display_paths(&[
            Path::new("/p/components/core/src/lib.rs"),
            Path::new("/elsewhere/x"),
        ]);
        assert_eq!(shown, "components/core/src/lib.rs, /elsewhere/x");
    }

    #[test]
    fn observer_counts_components() {
        let out = make_manager(true, OutputFormat::Plain);
        let mut observer = ConsoleObserver::new(&out, "/p");
        observer.run_started(2);
        observer.component_started("core");
        observer.component_started("api");
        assert_eq!(observer.index, 2);
        assert_eq!(observer.total, 2);
    }
}
