use crate::error::StepError;
use crate::pipeline::context::MigrationContext;
use crate::pipeline::step_trait::{Criticality, MigrationStep, StepResult};
use crate::project::layout::LEGACY_FILES;
use async_trait::async_trait;
use tracing::info;

pub struct RemoveLegacyFilesStep;

#[async_trait]
impl MigrationStep for RemoveLegacyFilesStep {
    fn name(&self) -> &'static str {
        "remove-legacy-files"
    }

    fn criticality(&self) -> Criticality {
        Criticality::BestEffort
    }

    fn description(&self) -> &'static str {
        "Delete index.html, the Vite entry point and the Vite configs"
    }

    async fn execute(&self, ctx: &mut MigrationContext) -> Result<StepResult, StepError> {
        let mut removed = Vec::new();
        for file in LEGACY_FILES {
            let path = ctx.path(file);
            if ctx.fs.is_file(&path) {
                ctx.fs.remove_file(&path)?;
                info!(file = %file, "Removed");
                removed.push(*file);
            }
        }

        if removed.is_empty() {
            return Ok(StepResult::skipped("no legacy files left"));
        }
        Ok(StepResult::applied(format!("removed {}", removed.join(", "))))
    }
}
