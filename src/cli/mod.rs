pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CleanupArgs, CliArgs, Commands, MigrateArgs, StepsArgs};
pub use output::{OutputFormat, OutputFormatter, StepInfo};
