use crate::error::StepError;
use crate::pipeline::context::MigrationContext;
use crate::pipeline::step_trait::{Criticality, MigrationStep, StepResult};
use crate::project::layout::TAILWIND_CONFIGS;
use crate::rewrite::{add_app_content_glob, TailwindEdit, APP_CONTENT_GLOB};
use async_trait::async_trait;
use tracing::debug;

pub struct UpdateTailwindConfigStep;

#[async_trait]
impl MigrationStep for UpdateTailwindConfigStep {
    fn name(&self) -> &'static str {
        "update-tailwind-config"
    }

    fn criticality(&self) -> Criticality {
        Criticality::BestEffort
    }

    fn description(&self) -> &'static str {
        "Add the app directory to the Tailwind content globs"
    }

    async fn execute(&self, ctx: &mut MigrationContext) -> Result<StepResult, StepError> {
        let Some(name) = TAILWIND_CONFIGS
            .iter()
            .find(|name| ctx.fs.is_file(&ctx.path(name)))
        else {
            debug!("No Tailwind config, skipping");
            return Ok(StepResult::skipped("no Tailwind config"));
        };

        let path = ctx.path(name);
        let config = ctx.fs.read_to_string(&path)?;

        match add_app_content_glob(&config) {
            TailwindEdit::Updated(text) => {
                ctx.fs.write(&path, &text)?;
                Ok(StepResult::applied(format!(
                    "added {} to {}",
                    APP_CONTENT_GLOB, name
                )))
            }
            TailwindEdit::AlreadyPresent => Ok(StepResult::skipped(format!(
                "{} already scans ./src/app/",
                name
            ))),
            TailwindEdit::NoContentArray => Ok(StepResult::skipped(format!(
                "{} has no content array",
                name
            ))),
        }
    }
}
