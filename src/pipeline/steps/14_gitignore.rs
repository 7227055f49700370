use crate::error::StepError;
use crate::pipeline::context::MigrationContext;
use crate::pipeline::step_trait::{Criticality, MigrationStep, StepResult};
use crate::project::layout::IGNORE_FILE;
use crate::rewrite::{ensure_entries, NEXT_IGNORE_ENTRIES};
use async_trait::async_trait;

pub struct UpdateGitignoreStep;

#[async_trait]
impl MigrationStep for UpdateGitignoreStep {
    fn name(&self) -> &'static str {
        "update-gitignore"
    }

    fn criticality(&self) -> Criticality {
        Criticality::BestEffort
    }

    fn description(&self) -> &'static str {
        "Ignore the Next.js build output in .gitignore"
    }

    async fn execute(&self, ctx: &mut MigrationContext) -> Result<StepResult, StepError> {
        let added = ensure_entries(ctx.fs.as_ref(), &ctx.path(IGNORE_FILE), NEXT_IGNORE_ENTRIES)?;
        if added.is_empty() {
            return Ok(StepResult::skipped(format!("{} already up to date", IGNORE_FILE)));
        }
        Ok(StepResult::applied(format!(
            "added {} to {}",
            added.join(", "),
            IGNORE_FILE
        )))
    }
}
