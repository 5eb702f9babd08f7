//! Process execution port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::CommandLine;

/// Process execution errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Failed to spawn notifier: {0}")]
    SpawnFailed(String),

    #[error("Notifier exited with status {}: {}", status_label(.status), .stderr.trim())]
    NonZeroExit {
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

fn status_label(status: &Option<i32>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "unknown".to_string(),
    }
}

/// Captured result of a finished notifier process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionOutput {
    /// Exit code, if the process exited normally
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Port for running a notifier command line
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run the command line to completion.
    ///
    /// # Arguments
    /// * `command` - Program and argument tokens
    ///
    /// # Returns
    /// Captured output on success, or the failure as reported by the process
    async fn execute(&self, command: &CommandLine) -> Result<ExecutionOutput, ExecutionError>;
}

/// Blanket implementation for boxed executor types
#[async_trait]
impl CommandExecutor for Box<dyn CommandExecutor> {
    async fn execute(&self, command: &CommandLine) -> Result<ExecutionOutput, ExecutionError> {
        self.as_ref().execute(command).await
    }
}
