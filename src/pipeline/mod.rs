pub mod context;
pub mod orchestrator;
pub mod report;
pub mod step_trait;
pub mod steps;

pub use context::MigrationContext;
pub use orchestrator::{cleanup_steps, migration_steps, MigrationOrchestrator};
pub use report::{MigrationReport, RunState, RunStatus, StepOutcome, StepRecord};
pub use step_trait::{Criticality, MigrationStep, StepResult};
