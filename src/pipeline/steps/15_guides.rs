use crate::error::StepError;
use crate::pipeline::context::MigrationContext;
use crate::pipeline::step_trait::{Criticality, MigrationStep, StepResult};
use crate::project::layout::{CLEANUP_SCRIPT, ENV_FILES, ENV_GUIDE, MIGRATION_GUIDE};
use crate::rewrite::collect_public_names;
use crate::templates::docs::{cleanup_script, env_guide, migration_guide, GuideInputs};
use async_trait::async_trait;

pub struct WriteGuidesStep;

#[async_trait]
impl MigrationStep for WriteGuidesStep {
    fn name(&self) -> &'static str {
        "write-guides"
    }

    fn criticality(&self) -> Criticality {
        Criticality::BestEffort
    }

    fn description(&self) -> &'static str {
        "Write the migration guide, the environment variable guide and the cleanup script"
    }

    async fn execute(&self, ctx: &mut MigrationContext) -> Result<StepResult, StepError> {
        let metadata = ctx.metadata_or_default();
        let component = ctx.component_or_resolve().display().to_string();
        let stylesheet = ctx.stylesheet.as_ref().map(|s| s.display().to_string());
        let package_manager = ctx.package_manager();
        let env_names = collect_public_names(ctx.fs.as_ref(), &ctx.root, ENV_FILES)?;

        let inputs = GuideInputs {
            metadata: &metadata,
            component: &component,
            stylesheet: stylesheet.as_deref(),
            package_manager,
            env_names: &env_names,
        };

        ctx.write_artifact(MIGRATION_GUIDE, &migration_guide(&inputs))?;
        ctx.write_artifact(ENV_GUIDE, &env_guide(&inputs))?;
        ctx.write_artifact(CLEANUP_SCRIPT, &cleanup_script(package_manager))?;

        Ok(StepResult::applied(format!(
            "wrote {}, {} and {}",
            MIGRATION_GUIDE, ENV_GUIDE, CLEANUP_SCRIPT
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::context::test_support::mock_context;
    use crate::process::PackageManager;

    #[tokio::test]
    async fn test_writes_all_guides() {
        let (mut ctx, fs, _) = mock_context();
        ctx.config.package_manager = Some(PackageManager::Bun);
        fs.add_file(".env", "NEXT_PUBLIC_API_URL=x\n");

        WriteGuidesStep.execute(&mut ctx).await.unwrap();

        assert!(fs.contents("NEXTJS_MIGRATION.md").unwrap().contains("`bun run dev`"));
        assert!(fs
            .contents("ENVIRONMENT_VARIABLES.md")
            .unwrap()
            .contains("process.env.NEXT_PUBLIC_API_URL"));
        assert!(fs.contents("cleanup-vite.sh").unwrap().contains("bun remove vite"));
    }
}
