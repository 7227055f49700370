//! Package manager selection (npm, Yarn, pnpm, Bun)

use crate::fs::FileSystem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

use super::CommandSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

/// Lockfiles checked in order; the first one present decides.
const LOCKFILES: &[(&str, PackageManager)] = &[
    ("bun.lockb", PackageManager::Bun),
    ("bun.lock", PackageManager::Bun),
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("package-lock.json", PackageManager::Npm),
];

impl PackageManager {
    pub fn executable(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "npm" => Some(PackageManager::Npm),
            "yarn" => Some(PackageManager::Yarn),
            "pnpm" => Some(PackageManager::Pnpm),
            "bun" => Some(PackageManager::Bun),
            _ => None,
        }
    }

    /// Command adding `packages` as dependencies
    pub fn add_command(&self, packages: &[String]) -> CommandSpec {
        let verb = match self {
            PackageManager::Npm => "install",
            _ => "add",
        };
        self.command(verb, packages)
    }

    /// Command removing `packages` from the dependencies
    pub fn remove_command(&self, packages: &[String]) -> CommandSpec {
        let verb = match self {
            PackageManager::Npm => "uninstall",
            _ => "remove",
        };
        self.command(verb, packages)
    }

    fn command(&self, verb: &str, packages: &[String]) -> CommandSpec {
        let mut args = vec![verb.to_string()];
        args.extend(packages.iter().cloned());
        CommandSpec::new(self.executable(), args)
    }

    /// Pick the package manager a project uses: lockfile first, then the
    /// `packageManager` field of the manifest, then npm.
    pub fn detect(fs: &dyn FileSystem, root: &Path, manifest: Option<&str>) -> Self {
        for (lockfile, manager) in LOCKFILES {
            if fs.is_file(&root.join(lockfile)) {
                debug!(lockfile, manager = %manager, "Package manager detected from lockfile");
                return *manager;
            }
        }

        if let Some(manager) = manifest.and_then(from_manifest_field) {
            debug!(manager = %manager, "Package manager detected from packageManager field");
            return manager;
        }

        PackageManager::Npm
    }
}

fn from_manifest_field(manifest: &str) -> Option<PackageManager> {
    let package: serde_json::Value = serde_json::from_str(manifest).ok()?;
    let field = package["packageManager"].as_str()?;
    let name = field.split('@').next()?;
    PackageManager::from_name(name)
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.executable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    fn packages(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_command_verbs() {
        let pkgs = packages(&["next@latest"]);
        assert_eq!(
            PackageManager::Npm.add_command(&pkgs).to_string(),
            "npm install next@latest"
        );
        assert_eq!(
            PackageManager::Yarn.add_command(&pkgs).to_string(),
            "yarn add next@latest"
        );
        assert_eq!(
            PackageManager::Pnpm.add_command(&pkgs).to_string(),
            "pnpm add next@latest"
        );
        assert_eq!(
            PackageManager::Bun.add_command(&pkgs).to_string(),
            "bun add next@latest"
        );
    }

    #[test]
    fn test_remove_command_verbs() {
        let pkgs = packages(&["vite", "@vitejs/plugin-react"]);
        assert_eq!(
            PackageManager::Npm.remove_command(&pkgs).to_string(),
            "npm uninstall vite @vitejs/plugin-react"
        );
        assert_eq!(
            PackageManager::Pnpm.remove_command(&pkgs).to_string(),
            "pnpm remove vite @vitejs/plugin-react"
        );
    }

    #[test]
    fn test_detect_defaults_to_npm() {
        let fs = MockFileSystem::new();
        assert_eq!(
            PackageManager::detect(&fs, fs.root(), None),
            PackageManager::Npm
        );
    }

    #[test]
    fn test_detect_from_lockfile() {
        let fs = MockFileSystem::new();
        fs.add_file("pnpm-lock.yaml", "lockfileVersion: '9.0'");
        assert_eq!(
            PackageManager::detect(&fs, fs.root(), None),
            PackageManager::Pnpm
        );
    }

    #[test]
    fn test_lockfile_wins_over_manifest_field() {
        let fs = MockFileSystem::new();
        fs.add_file("yarn.lock", "");
        let manifest = r#"{"packageManager": "pnpm@9.1.0"}"#;
        assert_eq!(
            PackageManager::detect(&fs, fs.root(), Some(manifest)),
            PackageManager::Yarn
        );
    }

    #[test]
    fn test_detect_from_manifest_field() {
        let fs = MockFileSystem::new();
        let manifest = r#"{"name": "shop", "packageManager": "bun@1.1.0"}"#;
        assert_eq!(
            PackageManager::detect(&fs, fs.root(), Some(manifest)),
            PackageManager::Bun
        );
    }

    #[test]
    fn test_from_name() {
        assert_eq!(PackageManager::from_name("PNPM"), Some(PackageManager::Pnpm));
        assert_eq!(PackageManager::from_name(" yarn "), Some(PackageManager::Yarn));
        assert_eq!(PackageManager::from_name("cargo"), None);
    }

    #[test]
    fn test_serialization() {
        assert_eq!(
            serde_json::to_string(&PackageManager::Pnpm).unwrap(),
            "\"pnpm\""
        );
    }
}
