use crate::error::StepError;
use crate::pipeline::context::MigrationContext;
use crate::pipeline::step_trait::{Criticality, MigrationStep, StepResult};
use async_trait::async_trait;
use tracing::{debug, info};

pub struct InstallNextStep;

#[async_trait]
impl MigrationStep for InstallNextStep {
    fn name(&self) -> &'static str {
        "install-next"
    }

    fn criticality(&self) -> Criticality {
        Criticality::Critical
    }

    fn description(&self) -> &'static str {
        "Add the next package with the project's package manager"
    }

    async fn execute(&self, ctx: &mut MigrationContext) -> Result<StepResult, StepError> {
        if ctx.config.skip_install {
            debug!("Install disabled by configuration");
            return Ok(StepResult::skipped("install skipped by configuration"));
        }

        let package = ctx.config.next_package();
        let command = ctx.package_manager().add_command(&[package.clone()]);
        info!(command = %command, "Installing Next.js");

        let status = ctx.runner.run(&command, &ctx.root).await?;
        if !status.success() {
            return Err(StepError::CommandFailed {
                command: command.to_string(),
                code: status.code,
            });
        }

        Ok(StepResult::applied(format!("installed {} via `{}`", package, command)))
    }
}
