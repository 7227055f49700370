//! Subcommand handlers. Each returns the process exit code.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, error, info};

use super::commands::{CleanupArgs, MigrateArgs, OutputFormatArg, StepsArgs};
use super::output::{OutputFormatter, StepInfo};
use crate::config::MigrationConfig;
use crate::fs::{FileSystem, RealFileSystem};
use crate::pipeline::{cleanup_steps, migration_steps, MigrationContext, MigrationOrchestrator};
use crate::process::SystemCommandRunner;
use crate::progress::LoggingHandler;

pub async fn handle_migrate(args: &MigrateArgs, base: MigrationConfig) -> i32 {
    let config = MigrationConfig {
        package_manager: args.package_manager.or(base.package_manager),
        skip_install: args.skip_install || base.skip_install,
        next_version: args.next_version.clone().unwrap_or(base.next_version),
        ..base
    };

    let orchestrator = MigrationOrchestrator::migration(Some(Box::new(LoggingHandler)));
    run_pipeline(
        &orchestrator,
        config,
        args.project_path.as_deref(),
        args.format,
        args.output.as_deref(),
    )
    .await
}

pub async fn handle_cleanup(args: &CleanupArgs, base: MigrationConfig) -> i32 {
    let config = MigrationConfig {
        package_manager: args.package_manager.or(base.package_manager),
        skip_install: args.skip_uninstall || base.skip_install,
        ..base
    };

    let orchestrator = MigrationOrchestrator::cleanup(Some(Box::new(LoggingHandler)));
    run_pipeline(
        &orchestrator,
        config,
        args.project_path.as_deref(),
        args.format,
        None,
    )
    .await
}

pub fn handle_steps(args: &StepsArgs) -> i32 {
    let mut steps = StepInfo::list("migrate", &migration_steps());
    steps.extend(StepInfo::list("cleanup", &cleanup_steps()));

    match OutputFormatter::new(args.format.into()).format_steps(&steps) {
        Ok(output) => {
            println!("{}", output.trim_end());
            0
        }
        Err(e) => {
            error!("Failed to format steps: {:#}", e);
            1
        }
    }
}

async fn run_pipeline(
    orchestrator: &MigrationOrchestrator,
    config: MigrationConfig,
    project_path: Option<&Path>,
    format: OutputFormatArg,
    output: Option<&Path>,
) -> i32 {
    if let Err(e) = config.validate() {
        error!("{}", e);
        return 1;
    }
    debug!("{}", config);

    let fs = Arc::new(RealFileSystem::new());
    let root = project_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    if !fs.is_dir(&root) {
        error!("Project directory not found: {}", root.display());
        return 1;
    }

    let mut ctx = MigrationContext::new(fs.clone(), Arc::new(SystemCommandRunner), config, root);
    let report = orchestrator.execute(&mut ctx).await;

    let formatted = match OutputFormatter::new(format.into()).format_report(&report) {
        Ok(formatted) => formatted,
        Err(e) => {
            error!("Failed to format report: {:#}", e);
            return 1;
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = fs.write(path, &formatted) {
                error!("Failed to write report: {:#}", e);
                return 1;
            }
            info!("Report written to {}", path.display());
        }
        None => println!("{}", formatted.trim_end()),
    }

    report.exit_code()
}
