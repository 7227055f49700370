//! Outcome of a pipeline run

use super::step_trait::Criticality;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepOutcome {
    Applied,
    Skipped,
    Failed,
}

/// One row per step that ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub step: String,
    pub criticality: Criticality,
    pub outcome: StepOutcome,
    /// Step detail, or the error message for failures
    pub detail: String,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum RunStatus {
    Completed,
    Aborted { step: String, error: String },
}

/// Progress of a run. `Aborted` and `Completed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Pending,
    Running(usize),
    Aborted,
    Completed,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Aborted | RunState::Completed)
    }

    /// Move to the next step, or to `Completed` past the last one
    pub fn advance(self, total: usize) -> Self {
        let next = match self {
            RunState::Pending => 0,
            RunState::Running(i) => i + 1,
            terminal => return terminal,
        };
        if next < total {
            RunState::Running(next)
        } else {
            RunState::Completed
        }
    }

    pub fn abort(self) -> Self {
        match self {
            RunState::Running(_) => RunState::Aborted,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MigrationReport {
    /// `migrate` or `cleanup`
    pub pipeline: String,
    pub project: PathBuf,
    pub status: RunStatus,
    pub steps: Vec<StepRecord>,
    pub duration_ms: u64,
}

impl MigrationReport {
    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Completed
    }

    pub fn count(&self, outcome: StepOutcome) -> usize {
        self.steps.iter().filter(|r| r.outcome == outcome).count()
    }

    pub fn record(&self, step: &str) -> Option<&StepRecord> {
        self.steps.iter().find(|r| r.step == step)
    }

    /// Process exit code for this report
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}
