use crate::error::StepError;
use crate::merge::{merge_scripts, to_pretty_json};
use crate::pipeline::context::MigrationContext;
use crate::pipeline::step_trait::{Criticality, MigrationStep, StepResult};
use crate::project::layout::MANIFEST;
use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

pub struct UpdatePackageScriptsStep;

#[async_trait]
impl MigrationStep for UpdatePackageScriptsStep {
    fn name(&self) -> &'static str {
        "update-package-scripts"
    }

    fn criticality(&self) -> Criticality {
        Criticality::Critical
    }

    fn description(&self) -> &'static str {
        "Point the dev, build, start and lint scripts at next"
    }

    async fn execute(&self, ctx: &mut MigrationContext) -> Result<StepResult, StepError> {
        let path = ctx.path(MANIFEST);
        if !ctx.fs.is_file(&path) {
            return Err(StepError::MissingFile(path));
        }

        let text = ctx.fs.read_to_string(&path)?;
        let mut manifest: Value =
            serde_json::from_str(&text).map_err(|e| StepError::parse(&path, e))?;
        let changes = merge_scripts(&mut manifest).map_err(|m| StepError::structure(&path, m))?;

        if changes.is_empty() {
            return Ok(StepResult::skipped(changes.summary()));
        }

        for (script, old) in &changes.replaced {
            info!(script = %script, previous = %old, "Replacing script");
        }

        let rendered = to_pretty_json(&manifest).context("Failed to serialize package.json")?;
        ctx.fs.write(&path, &rendered)?;

        Ok(StepResult::applied(changes.summary()))
    }
}
