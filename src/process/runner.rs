//! Blocking shell-out seam.
//!
//! Steps never spawn processes directly; they go through a [`CommandRunner`]
//! so the pipeline can be exercised without a real package manager.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Mutex;
use tracing::{debug, info};

/// A program and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit status of a finished command. `code` is `None` when the process
/// was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command to completion in `cwd`. `Err` means the process could
    /// not be started at all; a non-zero exit is reported through the status.
    async fn run(&self, spec: &CommandSpec, cwd: &Path) -> Result<CommandStatus>;
}

/// Runs commands as child processes inheriting stdin/stdout/stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(&self, spec: &CommandSpec, cwd: &Path) -> Result<CommandStatus> {
        info!(command = %spec, cwd = %cwd.display(), "Running command");

        let status = tokio::process::Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .with_context(|| format!("Failed to start `{}`", spec))?;

        debug!(command = %spec, code = ?status.code(), "Command finished");
        Ok(CommandStatus {
            code: status.code(),
        })
    }
}

/// Records every invocation and answers with a preset exit code
pub struct MockCommandRunner {
    exit_code: Option<i32>,
    spawn_error: bool,
    calls: Mutex<Vec<(CommandSpec, PathBuf)>>,
}

impl MockCommandRunner {
    /// Every command succeeds
    pub fn succeeding() -> Self {
        Self::with_exit_code(0)
    }

    pub fn with_exit_code(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            spawn_error: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every command fails to start, as if the executable were missing
    pub fn unavailable() -> Self {
        Self {
            exit_code: None,
            spawn_error: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(CommandSpec, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|(spec, _)| spec.to_string())
            .collect()
    }
}

#[async_trait]
impl CommandRunner for MockCommandRunner {
    async fn run(&self, spec: &CommandSpec, cwd: &Path) -> Result<CommandStatus> {
        self.calls
            .lock()
            .unwrap()
            .push((spec.clone(), cwd.to_path_buf()));

        if self.spawn_error {
            return Err(anyhow!("Failed to start `{}`: not found", spec));
        }
        Ok(CommandStatus {
            code: self.exit_code,
        })
    }
}
