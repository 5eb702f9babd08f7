//! Direct process executor

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{CommandExecutor, ExecutionError, ExecutionOutput};
use crate::domain::notification::CommandLine;

use super::{collect_output, spawn_error};

/// Spawns the notifier binary with every token as its own argument.
///
/// No shell is involved, so quote characters inside tokens reach the
/// notifier literally.
pub struct ProcessExecutor;

impl ProcessExecutor {
    /// Create a new direct executor
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandExecutor for ProcessExecutor {
    async fn execute(&self, command: &CommandLine) -> Result<ExecutionOutput, ExecutionError> {
        let output = Command::new(command.program())
            .args(command.args())
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| spawn_error(command.program(), e))?;

        collect_output(output)
    }
}
