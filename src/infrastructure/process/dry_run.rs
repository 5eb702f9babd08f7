//! Dry-run executor

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::ports::{CommandExecutor, ExecutionError, ExecutionOutput};
use crate::domain::notification::CommandLine;

/// Records command lines instead of running them
#[derive(Clone, Default)]
pub struct DryRunExecutor {
    recorded: Arc<Mutex<Vec<CommandLine>>>,
}

impl DryRunExecutor {
    /// Create a new dry-run executor
    pub fn new() -> Self {
        Self::default()
    }

    /// Command lines seen so far, in call order
    pub fn recorded(&self) -> Vec<CommandLine> {
        self.recorded
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CommandExecutor for DryRunExecutor {
    async fn execute(&self, command: &CommandLine) -> Result<ExecutionOutput, ExecutionError> {
        if let Ok(mut calls) = self.recorded.lock() {
            calls.push(command.clone());
        }
        Ok(ExecutionOutput::default())
    }
}
