use crate::error::StepError;
use crate::pipeline::context::MigrationContext;
use crate::pipeline::step_trait::{Criticality, MigrationStep, StepResult};
use crate::project::layout::{ENV_FILES, ENV_HELPER};
use crate::rewrite::collect_public_names;
use crate::templates::app::env_helper;
use async_trait::async_trait;

pub struct GenerateEnvHelperStep;

#[async_trait]
impl MigrationStep for GenerateEnvHelperStep {
    fn name(&self) -> &'static str {
        "generate-env-helper"
    }

    fn criticality(&self) -> Criticality {
        Criticality::BestEffort
    }

    fn description(&self) -> &'static str {
        "Generate src/utils/env.ts exposing the public environment variables"
    }

    async fn execute(&self, ctx: &mut MigrationContext) -> Result<StepResult, StepError> {
        let names = collect_public_names(ctx.fs.as_ref(), &ctx.root, ENV_FILES)?;
        ctx.write_artifact(ENV_HELPER, &env_helper(&names))?;

        Ok(StepResult::applied(format!(
            "wrote {} with {} public variable(s)",
            ENV_HELPER,
            names.len()
        )))
    }
}
