use crate::error::StepError;
use crate::pipeline::context::MigrationContext;
use crate::pipeline::step_trait::{Criticality, MigrationStep, StepResult};
use crate::project::layout::ENTRY_DOCUMENT;
use crate::project::Metadata;
use async_trait::async_trait;
use tracing::info;

pub struct ExtractMetadataStep;

#[async_trait]
impl MigrationStep for ExtractMetadataStep {
    fn name(&self) -> &'static str {
        "extract-metadata"
    }

    fn criticality(&self) -> Criticality {
        Criticality::BestEffort
    }

    fn description(&self) -> &'static str {
        "Read the page title and description from index.html"
    }

    async fn execute(&self, ctx: &mut MigrationContext) -> Result<StepResult, StepError> {
        let path = ctx.path(ENTRY_DOCUMENT);
        let found = ctx.fs.is_file(&path);
        let metadata = Metadata::from_document(ctx.fs.as_ref(), &path);

        let detail = format!(
            "title {:?}, description {:?}",
            metadata.title, metadata.description
        );
        ctx.metadata = Some(metadata);

        if !found {
            return Ok(StepResult::skipped(format!(
                "no {}, using {}",
                ENTRY_DOCUMENT, detail
            )));
        }

        info!("Extracted {}", detail);
        Ok(StepResult::applied(detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::context::test_support::mock_context;
    use crate::project::metadata::DEFAULT_TITLE;

    #[tokio::test]
    async fn test_extracts_title() {
        let (mut ctx, fs, _) = mock_context();
        fs.add_file("index.html", "<html><head><title>Shop</title></head></html>");

        let result = ExtractMetadataStep.execute(&mut ctx).await.unwrap();

        assert!(result.applied);
        assert_eq!(ctx.metadata.unwrap().title, "Shop");
    }

    #[tokio::test]
    async fn test_missing_document_uses_defaults() {
        let (mut ctx, _fs, _) = mock_context();

        let result = ExtractMetadataStep.execute(&mut ctx).await.unwrap();

        assert!(!result.applied);
        assert_eq!(ctx.metadata.unwrap().title, DEFAULT_TITLE);
    }
}
