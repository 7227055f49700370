//! Shared state threaded through every step of a run

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::MigrationConfig;
use crate::error::StepError;
use crate::fs::FileSystem;
use crate::process::{CommandRunner, PackageManager};
use crate::project::layout::MANIFEST;
use crate::project::{resolve_component, Metadata};

/// Collaborators and values produced by earlier steps.
///
/// Values are only ever written by the step that produces them and read by
/// later steps; accessors fall back to what the producing step would have
/// computed so a skipped or failed producer never blocks a consumer.
pub struct MigrationContext {
    /// File system abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Package manager invocations
    pub runner: Arc<dyn CommandRunner>,

    pub config: MigrationConfig,

    /// Project root; every layout path is relative to it
    pub root: PathBuf,

    /// Filled by `extract-metadata`
    pub metadata: Option<Metadata>,

    /// Root component relative to `root`, filled by `detect-entry-component`
    pub component: Option<PathBuf>,

    /// Global stylesheet relative to `root`, if the project has one
    pub stylesheet: Option<PathBuf>,
}

impl MigrationContext {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        runner: Arc<dyn CommandRunner>,
        config: MigrationConfig,
        root: PathBuf,
    ) -> Self {
        Self {
            fs,
            runner,
            config,
            root,
            metadata: None,
            component: None,
            stylesheet: None,
        }
    }

    /// Absolute path of a layout entry
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Configured package manager, else the one the project uses
    pub fn package_manager(&self) -> PackageManager {
        if let Some(pm) = self.config.package_manager {
            return pm;
        }
        let manifest = self.fs.read_optional(&self.path(MANIFEST)).ok().flatten();
        PackageManager::detect(self.fs.as_ref(), &self.root, manifest.as_deref())
    }

    pub fn metadata_or_default(&self) -> Metadata {
        self.metadata.clone().unwrap_or_default()
    }

    pub fn component_or_resolve(&self) -> PathBuf {
        self.component
            .clone()
            .unwrap_or_else(|| resolve_component(self.fs.as_ref(), &self.root))
    }

    /// Write a generated file, creating its directory first
    pub fn write_artifact(&self, relative: &str, content: &str) -> Result<PathBuf, StepError> {
        let path = self.path(relative);
        self.fs.write_with_parents(&path, content)?;
        Ok(path)
    }
}
