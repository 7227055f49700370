use crate::error::StepError;
use crate::pipeline::context::MigrationContext;
use crate::pipeline::step_trait::{Criticality, MigrationStep, StepResult};
use crate::project::layout::NEXT_CONFIG;
use crate::templates::config_files::next_config;
use async_trait::async_trait;

pub struct WriteNextConfigStep;

#[async_trait]
impl MigrationStep for WriteNextConfigStep {
    fn name(&self) -> &'static str {
        "write-next-config"
    }

    fn criticality(&self) -> Criticality {
        Criticality::BestEffort
    }

    fn description(&self) -> &'static str {
        "Write next.config.mjs for a static export into dist/"
    }

    async fn execute(&self, ctx: &mut MigrationContext) -> Result<StepResult, StepError> {
        ctx.write_artifact(NEXT_CONFIG, &next_config())?;
        Ok(StepResult::applied(format!("wrote {}", NEXT_CONFIG)))
    }
}
