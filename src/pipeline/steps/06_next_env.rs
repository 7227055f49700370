use crate::error::StepError;
use crate::pipeline::context::MigrationContext;
use crate::pipeline::step_trait::{Criticality, MigrationStep, StepResult};
use crate::project::layout::NEXT_ENV_DTS;
use crate::templates::config_files::next_env_dts;
use async_trait::async_trait;

pub struct WriteNextEnvStep;

#[async_trait]
impl MigrationStep for WriteNextEnvStep {
    fn name(&self) -> &'static str {
        "write-next-env"
    }

    fn criticality(&self) -> Criticality {
        Criticality::BestEffort
    }

    fn description(&self) -> &'static str {
        "Write the next-env.d.ts type shim"
    }

    async fn execute(&self, ctx: &mut MigrationContext) -> Result<StepResult, StepError> {
        ctx.write_artifact(NEXT_ENV_DTS, &next_env_dts())?;
        Ok(StepResult::applied(format!("wrote {}", NEXT_ENV_DTS)))
    }
}
