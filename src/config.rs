use crate::process::PackageManager;
use std::env;
use std::fmt;
use thiserror::Error;

const DEFAULT_NEXT_VERSION: &str = "latest";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_SKIP_INSTALL: bool = false;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid package manager: {0}. Valid options: npm, yarn, pnpm, bun")]
    InvalidPackageManager(String),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Settings for a migration run.
///
/// `Default` reads `NEXTPORT_*` environment variables; CLI flags are layered
/// on top with struct update syntax.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    /// Forced package manager; detected from the project when `None`
    pub package_manager: Option<PackageManager>,
    /// Raw `NEXTPORT_PACKAGE_MANAGER` value; an unknown name is rejected by
    /// `validate` unless `package_manager` was set by a flag
    pub package_manager_env: Option<String>,
    /// Do not invoke the package manager: no Next.js install during
    /// `migrate`, no Vite uninstall during `cleanup`
    pub skip_install: bool,
    pub next_version: String,
    pub log_level: String,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        let package_manager_env = env::var("NEXTPORT_PACKAGE_MANAGER").ok();
        let package_manager = package_manager_env
            .as_deref()
            .and_then(PackageManager::from_name);

        let skip_install = env::var("NEXTPORT_SKIP_INSTALL")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(DEFAULT_SKIP_INSTALL);

        let next_version = env::var("NEXTPORT_NEXT_VERSION")
            .unwrap_or_else(|_| DEFAULT_NEXT_VERSION.to_string());

        let log_level = env::var("NEXTPORT_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            package_manager,
            package_manager_env,
            skip_install,
            next_version,
            log_level,
        }
    }
}

impl MigrationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.package_manager.is_none() {
            if let Some(raw) = &self.package_manager_env {
                parse_package_manager(raw)?;
            }
        }

        let version = self.next_version.trim();
        if version.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Next.js version must not be empty".to_string(),
            ));
        }
        if version.chars().any(char::is_whitespace) {
            return Err(ConfigError::ValidationFailed(format!(
                "Next.js version '{}' must not contain whitespace",
                self.next_version
            )));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    /// Dependency specifier passed to the package manager, e.g. `next@latest`
    pub fn next_package(&self) -> String {
        format!("next@{}", self.next_version.trim())
    }
}

/// Parse a package manager name given on the command line or in the
/// environment
pub fn parse_package_manager(s: &str) -> Result<PackageManager, ConfigError> {
    PackageManager::from_name(s).ok_or_else(|| ConfigError::InvalidPackageManager(s.to_string()))
}

impl fmt::Display for MigrationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nextport Configuration:")?;
        match self.package_manager {
            Some(pm) => writeln!(f, "  Package Manager: {}", pm)?,
            None => writeln!(f, "  Package Manager: auto-detect")?,
        }
        writeln!(f, "  Skip Install: {}", self.skip_install)?;
        writeln!(f, "  Next.js Version: {}", self.next_version)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }

        fn unset(key: &str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    fn valid_config() -> MigrationConfig {
        MigrationConfig {
            package_manager: None,
            package_manager_env: None,
            skip_install: false,
            next_version: "latest".to_string(),
            log_level: "info".to_string(),
        }
    }

    #[test]
    #[serial]
    fn test_default_configuration() {
        let _guards = [
            EnvGuard::unset("NEXTPORT_PACKAGE_MANAGER"),
            EnvGuard::unset("NEXTPORT_SKIP_INSTALL"),
            EnvGuard::unset("NEXTPORT_NEXT_VERSION"),
            EnvGuard::unset("NEXTPORT_LOG_LEVEL"),
        ];

        let config = MigrationConfig::default();

        assert!(config.package_manager.is_none());
        assert_eq!(config.skip_install, DEFAULT_SKIP_INSTALL);
        assert_eq!(config.next_version, DEFAULT_NEXT_VERSION);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    #[serial]
    fn test_environment_variable_parsing() {
        let _guards = [
            EnvGuard::set("NEXTPORT_PACKAGE_MANAGER", "pnpm"),
            EnvGuard::set("NEXTPORT_SKIP_INSTALL", "true"),
            EnvGuard::set("NEXTPORT_NEXT_VERSION", "14.2.3"),
            EnvGuard::set("NEXTPORT_LOG_LEVEL", "DEBUG"),
        ];

        let config = MigrationConfig::default();

        assert_eq!(config.package_manager, Some(PackageManager::Pnpm));
        assert!(config.skip_install);
        assert_eq!(config.next_version, "14.2.3");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_invalid_env_values_fall_back() {
        let _guards = [
            EnvGuard::set("NEXTPORT_PACKAGE_MANAGER", "maven"),
            EnvGuard::set("NEXTPORT_SKIP_INSTALL", "sometimes"),
        ];

        let config = MigrationConfig::default();

        assert!(config.package_manager.is_none());
        assert_eq!(config.package_manager_env.as_deref(), Some("maven"));
        assert!(!config.skip_install);
    }

    #[test]
    fn test_validation_unknown_env_package_manager() {
        let config = MigrationConfig {
            package_manager_env: Some("maven".to_string()),
            ..valid_config()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPackageManager(ref name) if name == "maven"));

        let overridden = MigrationConfig {
            package_manager: Some(PackageManager::Yarn),
            ..config
        };
        assert!(overridden.validate().is_ok());
    }

    #[test]
    fn test_validation_known_env_package_manager() {
        let config = MigrationConfig {
            package_manager: Some(PackageManager::Pnpm),
            package_manager_env: Some("PNPM".to_string()),
            ..valid_config()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_valid() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_version() {
        let config = MigrationConfig {
            next_version: "  ".to_string(),
            ..valid_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[test]
    fn test_validation_version_with_whitespace() {
        let config = MigrationConfig {
            next_version: "14 && rm -rf /".to_string(),
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_log_level() {
        let config = MigrationConfig {
            log_level: "verbose".to_string(),
            ..valid_config()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_next_package() {
        let config = MigrationConfig {
            next_version: "14.2.3".to_string(),
            ..valid_config()
        };
        assert_eq!(config.next_package(), "next@14.2.3");
    }

    #[test]
    fn test_parse_package_manager() {
        assert_eq!(parse_package_manager("yarn").unwrap(), PackageManager::Yarn);
        assert!(matches!(
            parse_package_manager("ant"),
            Err(ConfigError::InvalidPackageManager(_))
        ));
    }

    #[test]
    fn test_display() {
        let output = valid_config().to_string();
        assert!(output.contains("Nextport Configuration:"));
        assert!(output.contains("Package Manager: auto-detect"));
        assert!(output.contains("Next.js Version: latest"));
    }
}
