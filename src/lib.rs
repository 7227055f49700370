//! nextport - migrate Vite single-page applications to Next.js
//!
//! A migration is an ordered list of [`pipeline::MigrationStep`]s run by a
//! [`pipeline::MigrationOrchestrator`] against one project directory. Steps
//! see the project only through the [`fs::FileSystem`] and
//! [`process::CommandRunner`] seams held by the
//! [`pipeline::MigrationContext`], so every step can run against
//! [`fs::MockFileSystem`] in tests.
//!
//! - [`project`]: fixed layout, metadata extraction, component detection
//! - [`merge`]: `package.json` and `tsconfig.json` merge policies
//! - [`templates`]: generated files
//! - [`rewrite`]: `.env` prefix renaming, `.gitignore` and Tailwind edits
//! - [`pipeline`]: steps, orchestration and the run report
//!
//! ```no_run
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use nextport::config::MigrationConfig;
//! use nextport::fs::RealFileSystem;
//! use nextport::pipeline::{MigrationContext, MigrationOrchestrator};
//! use nextport::process::SystemCommandRunner;
//!
//! # async fn run() {
//! let mut ctx = MigrationContext::new(
//!     Arc::new(RealFileSystem::new()),
//!     Arc::new(SystemCommandRunner),
//!     MigrationConfig::default(),
//!     PathBuf::from("./my-vite-app"),
//! );
//! let report = MigrationOrchestrator::migration(None).execute(&mut ctx).await;
//! assert!(report.is_success());
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod merge;
pub mod pipeline;
pub mod process;
pub mod progress;
pub mod project;
pub mod rewrite;
pub mod templates;
pub mod util;

pub use config::{ConfigError, MigrationConfig};
pub use error::StepError;
pub use pipeline::{MigrationContext, MigrationOrchestrator, MigrationReport, RunStatus};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
