use crate::error::StepError;
use crate::pipeline::context::MigrationContext;
use crate::pipeline::step_trait::{Criticality, MigrationStep, StepResult};
use crate::project::{resolve_candidate, resolve_component, STYLESHEET_CANDIDATES};
use async_trait::async_trait;
use tracing::{info, warn};

pub struct DetectEntryComponentStep;

#[async_trait]
impl MigrationStep for DetectEntryComponentStep {
    fn name(&self) -> &'static str {
        "detect-entry-component"
    }

    fn criticality(&self) -> Criticality {
        Criticality::BestEffort
    }

    fn description(&self) -> &'static str {
        "Locate the root component and the global stylesheet"
    }

    async fn execute(&self, ctx: &mut MigrationContext) -> Result<StepResult, StepError> {
        let component = resolve_component(ctx.fs.as_ref(), &ctx.root);
        if !ctx.fs.is_file(&ctx.path(&component)) {
            warn!(
                component = %component.display(),
                "No root component found, the client wrapper will import the fallback path"
            );
        }

        let stylesheet = resolve_candidate(ctx.fs.as_ref(), &ctx.root, &STYLESHEET_CANDIDATES);

        let detail = format!(
            "component {}, stylesheet {}",
            component.display(),
            stylesheet
                .as_ref()
                .map(|s| s.display().to_string())
                .unwrap_or_else(|| "none".to_string())
        );
        info!("Detected {}", detail);

        ctx.component = Some(component);
        ctx.stylesheet = stylesheet;
        Ok(StepResult::applied(detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::context::test_support::mock_context;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_detects_component_and_stylesheet() {
        let (mut ctx, fs, _) = mock_context();
        fs.add_file("src/App.jsx", "");
        fs.add_file("src/styles/globals.css", "");

        DetectEntryComponentStep.execute(&mut ctx).await.unwrap();

        assert_eq!(ctx.component, Some(PathBuf::from("src/App.jsx")));
        assert_eq!(ctx.stylesheet, Some(PathBuf::from("src/styles/globals.css")));
    }

    #[tokio::test]
    async fn test_fallback_without_candidates() {
        let (mut ctx, _fs, _) = mock_context();

        let result = DetectEntryComponentStep.execute(&mut ctx).await.unwrap();

        assert_eq!(ctx.component, Some(PathBuf::from("src/App.tsx")));
        assert!(ctx.stylesheet.is_none());
        assert!(result.detail.ends_with("stylesheet none"));
    }
}
