//! Package manager shell-outs

pub mod package_manager;
pub mod runner;

pub use package_manager::PackageManager;
pub use runner::{CommandRunner, CommandSpec, CommandStatus, MockCommandRunner, SystemCommandRunner};
