use crate::error::StepError;
use crate::pipeline::context::MigrationContext;
use crate::pipeline::step_trait::{Criticality, MigrationStep, StepResult};
use crate::project::layout::MANIFEST;
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

pub struct VerifyManifestStep;

#[async_trait]
impl MigrationStep for VerifyManifestStep {
    fn name(&self) -> &'static str {
        "verify-manifest"
    }

    fn criticality(&self) -> Criticality {
        Criticality::Critical
    }

    fn description(&self) -> &'static str {
        "Require package.json to exist and hold a JSON object"
    }

    async fn execute(&self, ctx: &mut MigrationContext) -> Result<StepResult, StepError> {
        let path = ctx.path(MANIFEST);
        if !ctx.fs.is_file(&path) {
            return Err(StepError::MissingFile(path));
        }

        let text = ctx.fs.read_to_string(&path)?;
        let manifest: Value = serde_json::from_str(&text).map_err(|e| StepError::parse(&path, e))?;
        if !manifest.is_object() {
            return Err(StepError::structure(&path, "root is not a JSON object"));
        }

        let name = manifest["name"].as_str().unwrap_or("unnamed project");
        let pm = ctx.package_manager();
        info!(project = %name, package_manager = %pm, "Manifest verified");

        Ok(StepResult::applied(format!(
            "{} is valid ({}, package manager {})",
            MANIFEST, name, pm
        )))
    }
}
