//! Shell process executor

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{CommandExecutor, ExecutionError, ExecutionOutput};
use crate::domain::notification::CommandLine;

use super::{collect_output, spawn_error};

/// Runs the space-joined command line through `sh -c`.
///
/// The shell strips the quotes embedded in message and title tokens and
/// splits tokens such as `-i icon.png` into separate arguments.
pub struct ShellExecutor;

const SHELL: &str = "sh";

impl ShellExecutor {
    /// Create a shell executor using `sh`
    pub fn new() -> Self {
        Self
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandExecutor for ShellExecutor {
    async fn execute(&self, command: &CommandLine) -> Result<ExecutionOutput, ExecutionError> {
        let output = Command::new(SHELL)
            .arg("-c")
            .arg(command.to_string())
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| spawn_error(SHELL, e))?;

        collect_output(output)
    }
}
