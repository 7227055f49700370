//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, error, info, warn};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started {
                project,
                total_steps,
            } => {
                info!(project = %project, steps = total_steps, "Starting migration");
            }
            ProgressEvent::StepStarted { step, index, total } => {
                debug!(
                    step = %step,
                    progress = format!("{}/{}", index, total),
                    "Running step"
                );
            }
            ProgressEvent::StepComplete {
                step,
                applied,
                detail,
                duration,
            } => {
                if *applied {
                    info!(
                        step = %step,
                        duration_ms = duration.as_millis(),
                        "{}",
                        detail
                    );
                } else {
                    debug!(
                        step = %step,
                        duration_ms = duration.as_millis(),
                        "Skipped: {}",
                        detail
                    );
                }
            }
            ProgressEvent::StepFailed {
                step,
                critical,
                error,
            } => {
                if *critical {
                    error!(step = %step, error = %error, "Critical step failed");
                } else {
                    warn!(step = %step, error = %error, "Step failed, continuing");
                }
            }
            ProgressEvent::Completed {
                applied,
                skipped,
                failed,
                total_time,
            } => {
                if *failed > 0 {
                    warn!(
                        applied,
                        skipped,
                        failed,
                        total_time_ms = total_time.as_millis(),
                        "Migration complete with failures"
                    );
                } else {
                    info!(
                        applied,
                        skipped,
                        total_time_ms = total_time.as_millis(),
                        "Migration complete"
                    );
                }
            }
            ProgressEvent::Failed { step, error } => {
                error!(step = %step, error = %error, "Migration aborted");
            }
        }
    }
}
