use crate::error::StepError;
use crate::merge::{jsonc, to_pretty_json, tsconfig};
use crate::pipeline::context::MigrationContext;
use crate::pipeline::step_trait::{Criticality, MigrationStep, StepResult};
use crate::project::layout::TYPE_CONFIG;
use anyhow::Context;
use async_trait::async_trait;
use tracing::{debug, warn};

pub struct MergeTsconfigStep;

#[async_trait]
impl MigrationStep for MergeTsconfigStep {
    fn name(&self) -> &'static str {
        "merge-tsconfig"
    }

    fn criticality(&self) -> Criticality {
        Criticality::BestEffort
    }

    fn description(&self) -> &'static str {
        "Merge the compiler options, include and exclude entries Next.js needs into tsconfig.json"
    }

    async fn execute(&self, ctx: &mut MigrationContext) -> Result<StepResult, StepError> {
        let path = ctx.path(TYPE_CONFIG);
        let Some(text) = ctx.fs.read_optional(&path)? else {
            debug!("No tsconfig.json, skipping");
            return Ok(StepResult::skipped(format!("no {}", TYPE_CONFIG)));
        };

        let mut config = jsonc::parse(&text).map_err(|e| StepError::parse(&path, e))?;
        let changes = tsconfig::merge(&mut config).map_err(|m| StepError::structure(&path, m))?;

        for option in &changes.overridden {
            warn!(option = %option, "Overwrote compilerOptions entry with the value Next.js requires");
        }

        let rendered = to_pretty_json(&config).context("Failed to serialize tsconfig.json")?;
        if rendered == text {
            return Ok(StepResult::skipped(format!("{} already up to date", TYPE_CONFIG)));
        }

        ctx.fs.write(&path, &rendered)?;
        Ok(StepResult::applied(changes.summary()))
    }
}
