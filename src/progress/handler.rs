//! Progress handler trait and events

use std::time::Duration;

/// Events emitted while a pipeline runs
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Pipeline started
    Started { project: String, total_steps: usize },

    /// A step is about to run
    StepStarted {
        step: String,
        index: usize,
        total: usize,
    },

    /// A step finished, whether or not it changed anything
    StepComplete {
        step: String,
        applied: bool,
        detail: String,
        duration: Duration,
    },

    /// A step failed
    StepFailed {
        step: String,
        critical: bool,
        error: String,
    },

    /// Every step ran
    Completed {
        applied: usize,
        skipped: usize,
        failed: usize,
        total_time: Duration,
    },

    /// A critical step failed and the remaining steps were not run
    Failed { step: String, error: String },
}

/// Trait for handling progress events during a pipeline run
pub trait ProgressHandler: Send + Sync {
    /// Called when a progress event occurs
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_progress(&self, _event: &ProgressEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingHandler {
        count: Arc<AtomicUsize>,
    }

    impl ProgressHandler for CountingHandler {
        fn on_progress(&self, _event: &ProgressEvent) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpHandler;
        handler.on_progress(&ProgressEvent::Started {
            project: "/test".to_string(),
            total_steps: 3,
        });
    }

    #[test]
    fn test_progress_events() {
        let count = Arc::new(AtomicUsize::new(0));
        let handler = CountingHandler {
            count: count.clone(),
        };

        handler.on_progress(&ProgressEvent::Started {
            project: "/test".to_string(),
            total_steps: 1,
        });
        handler.on_progress(&ProgressEvent::StepStarted {
            step: "verify-manifest".to_string(),
            index: 1,
            total: 1,
        });
        handler.on_progress(&ProgressEvent::Completed {
            applied: 1,
            skipped: 0,
            failed: 0,
            total_time: Duration::from_millis(5),
        });

        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_event_debug() {
        let event = ProgressEvent::Failed {
            step: "install-next".to_string(),
            error: "exit code 1".to_string(),
        };
        let debug_str = format!("{:?}", event);
        assert!(debug_str.contains("Failed"));
        assert!(debug_str.contains("install-next"));
    }
}
