use crate::error::StepError;
use crate::pipeline::context::MigrationContext;
use crate::pipeline::step_trait::{Criticality, MigrationStep, StepResult};
use crate::project::layout::ROOT_LAYOUT;
use async_trait::async_trait;

pub struct VerifyMigratedStep;

#[async_trait]
impl MigrationStep for VerifyMigratedStep {
    fn name(&self) -> &'static str {
        "verify-migrated"
    }

    fn criticality(&self) -> Criticality {
        Criticality::Critical
    }

    fn description(&self) -> &'static str {
        "Require the generated root layout before deleting anything"
    }

    async fn execute(&self, ctx: &mut MigrationContext) -> Result<StepResult, StepError> {
        if !ctx.fs.is_file(&ctx.path(ROOT_LAYOUT)) {
            return Err(StepError::Precondition(format!(
                "{} not found, run `nextport migrate` first",
                ROOT_LAYOUT
            )));
        }
        Ok(StepResult::applied(format!("{} present", ROOT_LAYOUT)))
    }
}
