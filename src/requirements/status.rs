//! Per-step outcomes and the run summary.
//!
//! Every installer step produces a [`StepOutcome`]. The outcomes are
//! collected into a [`RunSummary`] that the UI renders at the end of a run.

use crate::requirements::registry::OsFamily;
use crate::requirements::version::Version;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The result of one installer step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    /// Already present at a sufficient version; nothing was run.
    Satisfied {
        #[serde(skip_serializing_if = "Option::is_none")]
        version: Option<Version>,
    },
    /// Install commands ran and exited successfully.
    Installed,
    /// Install (or sync) failed; the run carried on.
    Failed { reason: String },
    /// Dry run: the tool is missing and would have been installed.
    WouldInstall,
}

impl StepOutcome {
    /// Whether the step failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, StepOutcome::Failed { .. })
    }

    /// Short label for tables.
    pub fn label(&self) -> &'static str {
        match self {
            StepOutcome::Satisfied { .. } => "satisfied",
            StepOutcome::Installed => "installed",
            StepOutcome::Failed { .. } => "failed",
            StepOutcome::WouldInstall => "would install",
        }
    }
}

/// Outcome of one named step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    /// Display name of the tool.
    pub name: String,
    /// What happened.
    pub outcome: StepOutcome,
}

/// Everything a run did, in order.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Detected OS family.
    pub os: OsFamily,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Whether installs were skipped.
    pub dry_run: bool,
    /// One entry per requirement, in table order.
    pub steps: Vec<StepReport>,
    /// Submodule sync outcome, `None` when the sync was skipped.
    pub submodules: Option<StepOutcome>,
}

impl RunSummary {
    /// Start an empty summary.
    pub fn new(os: OsFamily, dry_run: bool) -> Self {
        Self {
            os,
            started_at: Utc::now(),
            dry_run,
            steps: Vec::new(),
            submodules: None,
        }
    }

    /// Record a step outcome.
    pub fn record(&mut self, name: impl Into<String>, outcome: StepOutcome) {
        self.steps.push(StepReport {
            name: name.into(),
            outcome,
        });
    }

    /// Number of steps already satisfied.
    pub fn satisfied(&self) -> usize {
        self.count(|o| matches!(o, StepOutcome::Satisfied { .. }))
    }

    /// Number of steps that ran successfully, including the submodule sync.
    pub fn installed(&self) -> usize {
        self.count(|o| matches!(o, StepOutcome::Installed))
    }

    /// Number of failed steps, including the submodule sync.
    pub fn failed(&self) -> usize {
        self.count(StepOutcome::is_failure)
    }

    /// Names of failed steps.
    pub fn failed_steps(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .steps
            .iter()
            .filter(|s| s.outcome.is_failure())
            .map(|s| s.name.as_str())
            .collect();
        if self.submodules.as_ref().is_some_and(StepOutcome::is_failure) {
            names.push("submodules");
        }
        names
    }

    /// Whether anything failed.
    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    /// Tool steps and the submodule sync, when it ran.
    fn outcomes(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps
            .iter()
            .map(|s| &s.outcome)
            .chain(self.submodules.as_ref())
    }

    fn count(&self, pred: impl Fn(&StepOutcome) -> bool) -> usize {
        self.outcomes().filter(|&o| pred(o)).count()
    }
}
