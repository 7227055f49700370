use crate::error::StepError;
use crate::pipeline::context::MigrationContext;
use crate::pipeline::step_trait::{Criticality, MigrationStep, StepResult};
use crate::project::layout::{APP_DIR, ROOT_LAYOUT};
use crate::project::relative_import;
use crate::templates::app::root_layout;
use async_trait::async_trait;
use std::path::Path;

pub struct GenerateRootLayoutStep;

#[async_trait]
impl MigrationStep for GenerateRootLayoutStep {
    fn name(&self) -> &'static str {
        "generate-root-layout"
    }

    fn criticality(&self) -> Criticality {
        Criticality::BestEffort
    }

    fn description(&self) -> &'static str {
        "Generate src/app/layout.tsx with the extracted metadata"
    }

    async fn execute(&self, ctx: &mut MigrationContext) -> Result<StepResult, StepError> {
        let metadata = ctx.metadata_or_default();
        let stylesheet = ctx
            .stylesheet
            .as_ref()
            .map(|s| relative_import(Path::new(APP_DIR), s, false));

        ctx.write_artifact(ROOT_LAYOUT, &root_layout(&metadata, stylesheet.as_deref()))?;

        Ok(StepResult::applied(format!(
            "wrote {} (title {:?})",
            ROOT_LAYOUT, metadata.title
        )))
    }
}
