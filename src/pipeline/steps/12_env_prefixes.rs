use crate::error::StepError;
use crate::pipeline::context::MigrationContext;
use crate::pipeline::step_trait::{Criticality, MigrationStep, StepResult};
use crate::project::layout::ENV_FILES;
use crate::rewrite::rewrite_env_files;
use async_trait::async_trait;

pub struct RewriteEnvPrefixesStep;

#[async_trait]
impl MigrationStep for RewriteEnvPrefixesStep {
    fn name(&self) -> &'static str {
        "rewrite-env-prefixes"
    }

    fn criticality(&self) -> Criticality {
        Criticality::BestEffort
    }

    fn description(&self) -> &'static str {
        "Rename VITE_ variables to NEXT_PUBLIC_ in the .env files"
    }

    async fn execute(&self, ctx: &mut MigrationContext) -> Result<StepResult, StepError> {
        let rewritten = rewrite_env_files(ctx.fs.as_ref(), &ctx.root, ENV_FILES)?;
        if rewritten.is_empty() {
            return Ok(StepResult::skipped("no VITE_ variables found"));
        }

        let files: Vec<String> = rewritten
            .iter()
            .map(|r| format!("{} ({})", r.file, r.replacements))
            .collect();
        Ok(StepResult::applied(format!("renamed in {}", files.join(", "))))
    }
}
