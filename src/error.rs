//! Error types for stdeploy
//!
//! Library code returns [`DeployError`]; the binary wraps it in `anyhow`
//! and maps it to a process exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for stdeploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for deployment runs.
///
/// Every variant is fatal: the run stops at the first error and nothing
/// already done (init, commit, remote change) is rolled back.
#[derive(Error, Debug)]
pub enum DeployError {
    /// A marker file is missing from the working directory
    #[error("required file '{}' not found - run stdeploy from your project root", path.display())]
    MissingMarker { path: PathBuf },

    /// The version-control executable could not be run
    #[error("'{program}' is not installed or not on PATH")]
    VcsUnavailable { program: String },

    /// Menu input outside the offered options
    #[error("invalid choice '{input}' - expected 1, 2, 3 or 4")]
    InvalidChoice { input: String },

    /// A prompted value failed validation
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Operator declined a confirmation
    #[error("deployment aborted by operator")]
    Aborted,

    /// An external command exited unsuccessfully
    #[error("`{command}` failed ({}){}", describe_status(.status), describe_stderr(.stderr))]
    CommandFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    /// Configuration file could not be read or parsed
    #[error("invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeployError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Missing marker files or missing git.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            DeployError::MissingMarker { .. } | DeployError::VcsUnavailable { .. }
        )
    }

    /// Bad operator input, including a declined confirmation.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            DeployError::InvalidChoice { .. }
                | DeployError::InvalidInput { .. }
                | DeployError::Aborted
        )
    }

    /// Follow-up advice printed under the error line.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            DeployError::VcsUnavailable { .. } => Some("Install git from https://git-scm.com"),
            DeployError::CommandFailed { command, .. } if command.contains(" push") => Some(
                "Check that the repository exists, is empty, and that you can push to it",
            ),
            DeployError::Config { .. } => Some("Fix or remove the file, then run stdeploy again"),
            _ => None,
        }
    }
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

fn describe_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}
