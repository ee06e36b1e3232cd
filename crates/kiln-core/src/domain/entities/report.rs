//! Structured outcome of a generation run.
//!
//! The orchestrator never swallows a component- or artifact-level failure:
//! each one lands here, and the caller decides how to present it.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// The fixed artifact categories produced for every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    BuildManifest,
    SourceStub,
    Readme,
    MachineManifest,
    Instructions,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        Self::BuildManifest,
        Self::SourceStub,
        Self::Readme,
        Self::MachineManifest,
        Self::Instructions,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BuildManifest => "build-manifest",
            Self::SourceStub => "source-stub",
            Self::Readme => "readme",
            Self::MachineManifest => "machine-manifest",
            Self::Instructions => "instructions",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArtifactOutcome {
    Written { files: Vec<PathBuf> },
    Skipped { reason: String },
}

impl ArtifactOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactRecord {
    pub kind: ArtifactKind,
    #[serde(flatten)]
    pub outcome: ArtifactOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComponentStatus {
    Completed,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentReport {
    pub name: String,
    pub size_estimate: u32,
    #[serde(flatten)]
    pub status: ComponentStatus,
    pub artifacts: Vec<ArtifactRecord>,
}

impl ComponentReport {
    pub fn new(name: impl Into<String>, size_estimate: u32) -> Self {
        Self {
            name: name.into(),
            size_estimate,
            status: ComponentStatus::Completed,
            artifacts: Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, ComponentStatus::Failed { .. })
    }

    pub fn outcome(&self, kind: ArtifactKind) -> Option<&ArtifactOutcome> {
        self.artifacts
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| &a.outcome)
    }

    pub fn written_files(&self) -> impl Iterator<Item = &PathBuf> {
        self.artifacts.iter().flat_map(|a| match &a.outcome {
            ArtifactOutcome::Written { files } => files.as_slice(),
            ArtifactOutcome::Skipped { .. } => &[],
        })
    }
}

/// Severity of a recorded issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueLevel {
    Warning,
    Failure,
}

/// A warning or failure pulled out of the report for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunIssue {
    pub level: IssueLevel,
    pub component: String,
    pub artifact: Option<ArtifactKind>,
    pub reason: String,
}

impl fmt::Display for RunIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.artifact {
            Some(kind) => write!(f, "{} [{}]: {}", self.component, kind, self.reason),
            None => write!(f, "{}: {}", self.component, self.reason),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub components: Vec<ComponentReport>,
}

impl RunReport {
    pub fn component(&self, name: &str) -> Option<&ComponentReport> {
        self.components.iter().find(|c| c.name == name)
    }

    pub fn processed(&self) -> usize {
        self.components.len()
    }

    pub fn succeeded(&self) -> usize {
        self.components.iter().filter(|c| !c.is_failed()).count()
    }

    /// Skipped artifacts, in processing order.
    pub fn warnings(&self) -> Vec<RunIssue> {
        self.components
            .iter()
            .flat_map(|c| {
                c.artifacts.iter().filter_map(move |a| match &a.outcome {
                    ArtifactOutcome::Skipped { reason } => Some(RunIssue {
                        level: IssueLevel::Warning,
                        component: c.name.clone(),
                        artifact: Some(a.kind),
                        reason: reason.clone(),
                    }),
                    ArtifactOutcome::Written { .. } => None,
                })
            })
            .collect()
    }

    /// Failed components, in processing order.
    pub fn failures(&self) -> Vec<RunIssue> {
        self.components
            .iter()
            .filter_map(|c| match &c.status {
                ComponentStatus::Failed { reason } => Some(RunIssue {
                    level: IssueLevel::Failure,
                    component: c.name.clone(),
                    artifact: None,
                    reason: reason.clone(),
                }),
                ComponentStatus::Completed => None,
            })
            .collect()
    }

    pub fn issues(&self) -> Vec<RunIssue> {
        let mut all = self.failures();
        all.extend(self.warnings());
        all
    }

    /// No failures and no skipped artifacts.
    pub fn is_clean(&self) -> bool {
        self.issues().is_empty()
    }

    pub fn total_size_estimate(&self) -> u64 {
        self.components
            .iter()
            .map(|c| u64::from(c.size_estimate))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> RunReport {
        let mut ok = ComponentReport::new("core", 100);
        ok.artifacts.push(ArtifactRecord {
            kind: ArtifactKind::Readme,
            outcome: ArtifactOutcome::Written {
                files: vec![PathBuf::from("components/core/README.md")],
            },
        });
        ok.artifacts.push(ArtifactRecord {
            kind: ArtifactKind::MachineManifest,
            outcome: ArtifactOutcome::Skipped {
                reason: "no serializer".into(),
            },
        });

        let mut failed = ComponentReport::new("api", 50);
        failed.status = ComponentStatus::Failed {
            reason: "permission denied".into(),
        };

        RunReport {
            components: vec![ok, failed],
        }
    }

    #[test]
    fn aggregates_issues() {
        let r = report();
        assert_eq!(r.processed(), 2);
        assert_eq!(r.succeeded(), 1);
        assert_eq!(r.warnings().len(), 1);
        assert_eq!(r.failures().len(), 1);
        assert!(!r.is_clean());
        assert_eq!(r.total_size_estimate(), 150);
        assert_eq!(
            r.warnings()[0].to_string(),
            "core [machine-manifest]: no serializer"
        );
    }

    #[test]
    fn written_files_skip_skipped_artifacts() {
        let r = report();
        let core = r.component("core").unwrap();
        assert_eq!(core.written_files().count(), 1);
        assert!(core.outcome(ArtifactKind::MachineManifest).is_some());
        assert!(core.outcome(ArtifactKind::Instructions).is_none());
    }

    #[test]
    fn serializes_with_flattened_status() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["components"][1]["status"], "failed");
        assert_eq!(json["components"][0]["artifacts"][1]["status"], "skipped");
        assert_eq!(json["components"][0]["artifacts"][1]["kind"], "machine-manifest");
    }
}
