use crate::error::StepError;
use crate::pipeline::context::MigrationContext;
use crate::pipeline::step_trait::{Criticality, MigrationStep, StepResult};
use crate::project::layout::{CATCH_ALL_DIR, CLIENT_WRAPPER, ENTRY_PAGE};
use crate::project::relative_import;
use crate::templates::app::{client_wrapper, entry_page};
use async_trait::async_trait;
use std::path::Path;

pub struct GenerateEntryPageStep;

#[async_trait]
impl MigrationStep for GenerateEntryPageStep {
    fn name(&self) -> &'static str {
        "generate-entry-page"
    }

    fn criticality(&self) -> Criticality {
        Criticality::BestEffort
    }

    fn description(&self) -> &'static str {
        "Generate the catch-all page and the client-only wrapper around the root component"
    }

    async fn execute(&self, ctx: &mut MigrationContext) -> Result<StepResult, StepError> {
        let component = ctx.component_or_resolve();
        let import = relative_import(Path::new(CATCH_ALL_DIR), &component, true);

        ctx.write_artifact(ENTRY_PAGE, &entry_page())?;
        ctx.write_artifact(CLIENT_WRAPPER, &client_wrapper(&import))?;

        Ok(StepResult::applied(format!(
            "wrote {} and {} importing {}",
            ENTRY_PAGE, CLIENT_WRAPPER, import
        )))
    }
}
