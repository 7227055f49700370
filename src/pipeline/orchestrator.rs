use super::context::MigrationContext;
use super::report::{MigrationReport, RunState, RunStatus, StepOutcome, StepRecord};
use super::step_trait::MigrationStep;
use super::steps::cleanup::{RemoveLegacyFilesStep, UninstallViteStep, VerifyMigratedStep};
use super::steps::{
    DetectEntryComponentStep, ExtractMetadataStep, GenerateEntryPageStep, GenerateEnvHelperStep,
    GenerateRootLayoutStep, InstallNextStep, MergeTsconfigStep, RewriteEnvPrefixesStep,
    UpdateGitignoreStep, UpdatePackageScriptsStep, UpdateTailwindConfigStep, VerifyManifestStep,
    WriteGuidesStep, WriteNextConfigStep, WriteNextEnvStep,
};
use crate::progress::{ProgressEvent, ProgressHandler};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// The migration, in order
pub fn migration_steps() -> Vec<Box<dyn MigrationStep>> {
    vec![
        Box::new(VerifyManifestStep),
        Box::new(InstallNextStep),
        Box::new(UpdatePackageScriptsStep),
        Box::new(MergeTsconfigStep),
        Box::new(WriteNextConfigStep),
        Box::new(WriteNextEnvStep),
        Box::new(ExtractMetadataStep),
        Box::new(DetectEntryComponentStep),
        Box::new(GenerateRootLayoutStep),
        Box::new(GenerateEntryPageStep),
        Box::new(GenerateEnvHelperStep),
        Box::new(RewriteEnvPrefixesStep),
        Box::new(UpdateTailwindConfigStep),
        Box::new(UpdateGitignoreStep),
        Box::new(WriteGuidesStep),
    ]
}

/// Post-migration cleanup, in order
pub fn cleanup_steps() -> Vec<Box<dyn MigrationStep>> {
    vec![
        Box::new(VerifyMigratedStep),
        Box::new(RemoveLegacyFilesStep),
        Box::new(UninstallViteStep),
    ]
}

/// Runs a fixed list of steps against one project.
///
/// A failing critical step ends the run; a failing best-effort step is
/// recorded and the next step runs. Nothing is rolled back.
pub struct MigrationOrchestrator {
    name: &'static str,
    steps: Vec<Box<dyn MigrationStep>>,
    progress_handler: Option<Box<dyn ProgressHandler>>,
}

impl MigrationOrchestrator {
    pub fn new(
        name: &'static str,
        steps: Vec<Box<dyn MigrationStep>>,
        progress_handler: Option<Box<dyn ProgressHandler>>,
    ) -> Self {
        Self {
            name,
            steps,
            progress_handler,
        }
    }

    pub fn migration(progress_handler: Option<Box<dyn ProgressHandler>>) -> Self {
        Self::new("migrate", migration_steps(), progress_handler)
    }

    pub fn cleanup(progress_handler: Option<Box<dyn ProgressHandler>>) -> Self {
        Self::new("cleanup", cleanup_steps(), progress_handler)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn steps(&self) -> &[Box<dyn MigrationStep>] {
        &self.steps
    }

    fn emit(&self, event: ProgressEvent) {
        if let Some(handler) = &self.progress_handler {
            handler.on_progress(&event);
        }
    }

    pub async fn execute(&self, ctx: &mut MigrationContext) -> MigrationReport {
        let start = Instant::now();
        let total = self.steps.len();
        info!(
            "Starting {} pipeline for: {}",
            self.name,
            ctx.root.display()
        );
        self.emit(ProgressEvent::Started {
            project: ctx.root.display().to_string(),
            total_steps: total,
        });

        let mut records = Vec::with_capacity(total);
        let mut status = RunStatus::Completed;
        let mut state = RunState::Pending.advance(total);

        while let RunState::Running(index) = state {
            let step = &self.steps[index];
            let name = step.name();
            let criticality = step.criticality();
            info!("Step {}/{}: {}", index + 1, total, name);
            self.emit(ProgressEvent::StepStarted {
                step: name.to_string(),
                index: index + 1,
                total,
            });

            let step_start = Instant::now();
            let result = step.execute(ctx).await;
            let duration = step_start.elapsed();

            match result {
                Ok(result) => {
                    debug!(step = name, applied = result.applied, "Step complete");
                    records.push(StepRecord {
                        step: name.to_string(),
                        criticality,
                        outcome: if result.applied {
                            StepOutcome::Applied
                        } else {
                            StepOutcome::Skipped
                        },
                        detail: result.detail.clone(),
                        duration_ms: duration.as_millis() as u64,
                    });
                    self.emit(ProgressEvent::StepComplete {
                        step: name.to_string(),
                        applied: result.applied,
                        detail: result.detail,
                        duration,
                    });
                    state = state.advance(total);
                }
                Err(e) => {
                    let message = e.to_string();
                    records.push(StepRecord {
                        step: name.to_string(),
                        criticality,
                        outcome: StepOutcome::Failed,
                        detail: message.clone(),
                        duration_ms: duration.as_millis() as u64,
                    });
                    self.emit(ProgressEvent::StepFailed {
                        step: name.to_string(),
                        critical: criticality.is_critical(),
                        error: message.clone(),
                    });

                    if criticality.is_critical() {
                        error!(step = name, error = %message, "Critical step failed, aborting");
                        self.emit(ProgressEvent::Failed {
                            step: name.to_string(),
                            error: message.clone(),
                        });
                        status = RunStatus::Aborted {
                            step: name.to_string(),
                            error: message,
                        };
                        state = state.abort();
                    } else {
                        warn!(step = name, error = %message, "Best-effort step failed");
                        state = state.advance(total);
                    }
                }
            }
        }

        let report = MigrationReport {
            pipeline: self.name.to_string(),
            project: ctx.root.clone(),
            status,
            steps: records,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "{} pipeline finished: {} applied, {} skipped, {} failed",
            self.name,
            report.count(StepOutcome::Applied),
            report.count(StepOutcome::Skipped),
            report.count(StepOutcome::Failed)
        );
        self.emit(ProgressEvent::Completed {
            applied: report.count(StepOutcome::Applied),
            skipped: report.count(StepOutcome::Skipped),
            failed: report.count(StepOutcome::Failed),
            total_time: start.elapsed(),
        });

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StepError;
    use crate::pipeline::context::test_support::{config, mock_context, mock_context_with};
    use crate::pipeline::step_trait::{Criticality, StepResult};
    use crate::process::MockCommandRunner;
    use crate::progress::NoOpHandler;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    struct RecordingHandler {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl ProgressHandler for RecordingHandler {
        fn on_progress(&self, event: &ProgressEvent) {
            let label = match event {
                ProgressEvent::Started { .. } => "started".to_string(),
                ProgressEvent::StepStarted { step, .. } => format!("start:{}", step),
                ProgressEvent::StepComplete { step, .. } => format!("done:{}", step),
                ProgressEvent::StepFailed { step, .. } => format!("fail:{}", step),
                ProgressEvent::Completed { .. } => "completed".to_string(),
                ProgressEvent::Failed { step, .. } => format!("abort:{}", step),
            };
            self.events.lock().unwrap().push(label);
        }
    }

    struct FixedStep {
        name: &'static str,
        criticality: Criticality,
        fails: bool,
    }

    #[async_trait]
    impl MigrationStep for FixedStep {
        fn name(&self) -> &'static str {
            self.name
        }

        fn criticality(&self) -> Criticality {
            self.criticality
        }

        fn description(&self) -> &'static str {
            "test step"
        }

        async fn execute(&self, _ctx: &mut MigrationContext) -> Result<StepResult, StepError> {
            if self.fails {
                Err(StepError::Precondition(format!("{} failed", self.name)))
            } else {
                Ok(StepResult::applied("ok"))
            }
        }
    }

    fn step(name: &'static str, criticality: Criticality, fails: bool) -> Box<dyn MigrationStep> {
        Box::new(FixedStep {
            name,
            criticality,
            fails,
        })
    }

    fn shop_tree(fs: &crate::fs::MockFileSystem) {
        fs.add_file(
            "package.json",
            r#"{"name":"shop","scripts":{"dev":"vite","test":"vitest"},"devDependencies":{"vite":"^5"}}"#,
        );
        fs.add_file("index.html", "<title>Shop</title>");
        fs.add_file("src/App.tsx", "export default function App() { return null }");
        fs.add_file("src/main.tsx", "");
        fs.add_file("src/index.css", "");
        fs.add_file(".env", "VITE_API_URL=http://localhost\n");
    }

    #[test]
    fn test_step_names_unique_and_ordered() {
        let names: Vec<&str> = migration_steps().iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), 15);
        assert_eq!(names[0], "verify-manifest");
        assert_eq!(names[14], "write-guides");
        assert_eq!(names.iter().collect::<HashSet<_>>().len(), names.len());
    }

    #[test]
    fn test_only_setup_steps_are_critical() {
        let critical: Vec<&str> = migration_steps()
            .iter()
            .filter(|s| s.criticality().is_critical())
            .map(|s| s.name())
            .collect();
        assert_eq!(
            critical,
            vec!["verify-manifest", "install-next", "update-package-scripts"]
        );

        let cleanup: Vec<(&str, Criticality)> = cleanup_steps()
            .iter()
            .map(|s| (s.name(), s.criticality()))
            .collect();
        assert_eq!(cleanup[0], ("verify-migrated", Criticality::Critical));
        assert_eq!(cleanup.len(), 3);
    }

    #[tokio::test]
    async fn test_critical_failure_aborts() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let orchestrator = MigrationOrchestrator::new(
            "test",
            vec![
                step("a", Criticality::Critical, false),
                step("b", Criticality::Critical, true),
                step("c", Criticality::BestEffort, false),
            ],
            Some(Box::new(RecordingHandler {
                events: events.clone(),
            })),
        );
        let (mut ctx, _, _) = mock_context();

        let report = orchestrator.execute(&mut ctx).await;

        assert_eq!(
            report.status,
            RunStatus::Aborted {
                step: "b".to_string(),
                error: "Precondition failed: b failed".to_string(),
            }
        );
        assert_eq!(report.steps.len(), 2);
        assert!(report.record("c").is_none());
        assert_eq!(
            *events.lock().unwrap(),
            vec!["started", "start:a", "done:a", "start:b", "fail:b", "abort:b", "completed"]
        );
    }

    #[tokio::test]
    async fn test_best_effort_failure_continues() {
        let orchestrator = MigrationOrchestrator::new(
            "test",
            vec![
                step("a", Criticality::BestEffort, true),
                step("b", Criticality::BestEffort, false),
            ],
            Some(Box::new(NoOpHandler)),
        );
        let (mut ctx, _, _) = mock_context();

        let report = orchestrator.execute(&mut ctx).await;

        assert!(report.is_success());
        assert_eq!(report.record("a").unwrap().outcome, StepOutcome::Failed);
        assert_eq!(report.record("b").unwrap().outcome, StepOutcome::Applied);
    }

    #[tokio::test]
    async fn test_missing_manifest_writes_nothing() {
        let (mut ctx, fs, runner) = mock_context();
        fs.add_file("index.html", "<title>Shop</title>");

        let report = MigrationOrchestrator::migration(None).execute(&mut ctx).await;

        assert!(matches!(report.status, RunStatus::Aborted { ref step, .. } if step == "verify-manifest"));
        assert_eq!(fs.file_paths(), vec![fs.root().join("index.html")]);
        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn test_install_failure_stops_before_scripts() {
        let (mut ctx, fs, _) = mock_context_with(MockCommandRunner::with_exit_code(1));
        shop_tree(&fs);
        let before = fs.contents("package.json");

        let report = MigrationOrchestrator::migration(None).execute(&mut ctx).await;

        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.steps.len(), 2);
        assert_eq!(fs.contents("package.json"), before);
        assert!(fs.contents("src/app/layout.tsx").is_none());
    }

    #[tokio::test]
    async fn test_malformed_tsconfig_reported_and_run_continues() {
        let (mut ctx, fs, _) = mock_context();
        shop_tree(&fs);
        fs.add_file("tsconfig.json", "{ broken");

        let report = MigrationOrchestrator::migration(None).execute(&mut ctx).await;

        assert!(report.is_success());
        assert_eq!(report.record("merge-tsconfig").unwrap().outcome, StepOutcome::Failed);
        assert_eq!(fs.contents("tsconfig.json").unwrap(), "{ broken");
        assert!(fs.contents("src/app/layout.tsx").is_some());
    }

    #[tokio::test]
    async fn test_full_migration() {
        let (mut ctx, fs, runner) = mock_context();
        shop_tree(&fs);

        let report = MigrationOrchestrator::migration(None).execute(&mut ctx).await;

        assert!(report.is_success());
        assert_eq!(report.count(StepOutcome::Failed), 0);
        assert_eq!(runner.commands(), vec!["npm install next@latest"]);

        let layout = fs.contents("src/app/layout.tsx").unwrap();
        assert!(layout.contains("title: \"Shop\""));
        assert!(layout.contains("import '../index.css'"));
        assert!(fs
            .contents("src/app/[[...slug]]/client.tsx")
            .unwrap()
            .contains("import('../../App')"));
        assert!(fs
            .contents("src/utils/env.ts")
            .unwrap()
            .contains("API_URL: process.env.NEXT_PUBLIC_API_URL"));
        assert_eq!(
            fs.contents(".env").unwrap(),
            "NEXT_PUBLIC_API_URL=http://localhost\n"
        );
        assert!(fs.contents("src/main.tsx").is_some());
    }

    #[tokio::test]
    async fn test_second_run_is_stable() {
        let (mut ctx, fs, _) = mock_context();
        shop_tree(&fs);
        let orchestrator = MigrationOrchestrator::migration(None);

        orchestrator.execute(&mut ctx).await;
        let first: Vec<(std::path::PathBuf, Option<String>)> = fs
            .file_paths()
            .into_iter()
            .map(|p| {
                let content = fs.contents(&p);
                (p, content)
            })
            .collect();

        let mut ctx = MigrationContext::new(
            fs.clone(),
            Arc::new(MockCommandRunner::succeeding()),
            config(),
            fs.root().to_path_buf(),
        );
        let report = orchestrator.execute(&mut ctx).await;

        assert!(report.is_success());
        for (path, content) in first {
            assert_eq!(fs.contents(&path), content, "{} changed", path.display());
        }
        let manifest: serde_json::Value =
            serde_json::from_str(&fs.contents("package.json").unwrap()).unwrap();
        assert_eq!(manifest["scripts"]["test"], "vitest");
        assert_eq!(manifest["name"], "shop");
    }

    #[tokio::test]
    async fn test_cleanup_after_migration() {
        let (mut ctx, fs, runner) = mock_context();
        shop_tree(&fs);

        MigrationOrchestrator::migration(None).execute(&mut ctx).await;
        let report = MigrationOrchestrator::cleanup(None).execute(&mut ctx).await;

        assert!(report.is_success());
        assert!(fs.contents("index.html").is_none());
        assert!(fs.contents("src/main.tsx").is_none());
        assert_eq!(
            runner.commands(),
            vec!["npm install next@latest", "npm uninstall vite"]
        );
    }

    #[tokio::test]
    async fn test_cleanup_refuses_unmigrated_project() {
        let (mut ctx, fs, _) = mock_context();
        shop_tree(&fs);

        let report = MigrationOrchestrator::cleanup(None).execute(&mut ctx).await;

        assert_eq!(report.exit_code(), 1);
        assert!(fs.contents("index.html").is_some());
    }
}
