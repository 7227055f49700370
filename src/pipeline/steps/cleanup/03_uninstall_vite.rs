use crate::error::StepError;
use crate::pipeline::context::MigrationContext;
use crate::pipeline::step_trait::{Criticality, MigrationStep, StepResult};
use crate::project::layout::{LEGACY_PACKAGES, MANIFEST};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

pub struct UninstallViteStep;

#[async_trait]
impl MigrationStep for UninstallViteStep {
    fn name(&self) -> &'static str {
        "uninstall-vite"
    }

    fn criticality(&self) -> Criticality {
        Criticality::BestEffort
    }

    fn description(&self) -> &'static str {
        "Remove the Vite packages the project still depends on"
    }

    async fn execute(&self, ctx: &mut MigrationContext) -> Result<StepResult, StepError> {
        if ctx.config.skip_install {
            debug!("Uninstall disabled by configuration");
            return Ok(StepResult::skipped("uninstall skipped by configuration"));
        }

        let path = ctx.path(MANIFEST);
        let Some(text) = ctx.fs.read_optional(&path)? else {
            return Ok(StepResult::skipped(format!("no {}", MANIFEST)));
        };
        let manifest: Value = serde_json::from_str(&text).map_err(|e| StepError::parse(&path, e))?;

        let installed = installed_legacy_packages(&manifest);
        if installed.is_empty() {
            return Ok(StepResult::skipped("no Vite packages installed"));
        }

        let command = ctx.package_manager().remove_command(&installed);
        info!(command = %command, "Uninstalling Vite");

        let status = ctx.runner.run(&command, &ctx.root).await?;
        if !status.success() {
            return Err(StepError::CommandFailed {
                command: command.to_string(),
                code: status.code,
            });
        }

        Ok(StepResult::applied(format!("removed {}", installed.join(", "))))
    }
}

/// Legacy packages listed in `dependencies` or `devDependencies`. Some
/// package managers refuse to remove packages that are not installed.
fn installed_legacy_packages(manifest: &Value) -> Vec<String> {
    LEGACY_PACKAGES
        .iter()
        .filter(|name| {
            ["dependencies", "devDependencies"]
                .iter()
                .any(|section| manifest[*section].get(**name).is_some())
        })
        .map(|name| name.to_string())
        .collect()
}
