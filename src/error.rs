use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single migration step.
///
/// Whether the failure aborts the run is decided by the orchestrator from
/// the step's criticality, not by the error variant.
#[derive(Debug, Error)]
pub enum StepError {
    #[error("Required file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Unexpected structure in {}: {message}", .path.display())]
    InvalidStructure { path: PathBuf, message: String },

    #[error("Command `{command}` failed{}", exit_suffix(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error(transparent)]
    Io(#[from] anyhow::Error),
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {}", code),
        None => " (terminated by signal)".to_string(),
    }
}

impl StepError {
    pub fn parse(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        StepError::Parse {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn structure(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        StepError::InvalidStructure {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_display() {
        let err = StepError::MissingFile(PathBuf::from("/repo/package.json"));
        assert_eq!(
            err.to_string(),
            "Required file not found: /repo/package.json"
        );
    }

    #[test]
    fn test_command_failed_display() {
        let err = StepError::CommandFailed {
            command: "npm install next@latest".to_string(),
            code: Some(1),
        };
        assert_eq!(
            err.to_string(),
            "Command `npm install next@latest` failed with exit code 1"
        );

        let err = StepError::CommandFailed {
            command: "npm install".to_string(),
            code: None,
        };
        assert!(err.to_string().ends_with("(terminated by signal)"));
    }

    #[test]
    fn test_parse_helper() {
        let err = StepError::parse("tsconfig.json", "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "Failed to parse tsconfig.json: expected value at line 1"
        );
    }

    #[test]
    fn test_io_is_transparent() {
        let err: StepError = anyhow::anyhow!("Failed to write file \"x\"").into();
        assert_eq!(err.to_string(), "Failed to write file \"x\"");
    }
}
