use super::context::MigrationContext;
use crate::error::StepError;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

/// Whether a step's failure stops the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Criticality {
    Critical,
    BestEffort,
}

impl Criticality {
    pub fn is_critical(self) -> bool {
        self == Criticality::Critical
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Criticality::Critical => "critical",
            Criticality::BestEffort => "best-effort",
        }
    }
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a step did. `applied == false` means there was nothing to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub applied: bool,
    pub detail: String,
}

impl StepResult {
    pub fn applied(detail: impl Into<String>) -> Self {
        Self {
            applied: true,
            detail: detail.into(),
        }
    }

    pub fn skipped(detail: impl Into<String>) -> Self {
        Self {
            applied: false,
            detail: detail.into(),
        }
    }
}

#[async_trait]
pub trait MigrationStep: Send + Sync {
    /// Stable kebab-case identifier shown in logs and reports
    fn name(&self) -> &'static str;

    fn criticality(&self) -> Criticality;

    /// One-line summary for `nextport steps`
    fn description(&self) -> &'static str;

    async fn execute(&self, ctx: &mut MigrationContext) -> Result<StepResult, StepError>;
}
