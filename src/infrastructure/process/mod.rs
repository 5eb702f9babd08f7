//! Process execution infrastructure module
//!
//! Runs notifier command lines either directly (one argv entry per token)
//! or through `sh -c`, or records them without running anything.

mod direct;
mod dry_run;
mod shell;

pub use direct::ProcessExecutor;
pub use dry_run::DryRunExecutor;
pub use shell::ShellExecutor;

use std::io;
use std::process::Output;

use crate::application::ports::{CommandExecutor, ExecutionError, ExecutionOutput};
use crate::domain::config::ExecutorKind;

/// Create the executor for the configured kind
pub fn create_executor(kind: ExecutorKind) -> Box<dyn CommandExecutor> {
    match kind {
        ExecutorKind::Direct => Box::new(ProcessExecutor::new()),
        ExecutorKind::Shell => Box::new(ShellExecutor::new()),
    }
}

/// Map a spawn failure of `program` to an execution error
fn spawn_error(program: &str, e: io::Error) -> ExecutionError {
    if e.kind() == io::ErrorKind::NotFound {
        ExecutionError::NotFound(program.to_string())
    } else {
        ExecutionError::SpawnFailed(e.to_string())
    }
}

/// Convert captured process output, failing on a non-zero exit
fn collect_output(output: Output) -> Result<ExecutionOutput, ExecutionError> {
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    let status = output.status.code();

    if !output.status.success() {
        return Err(ExecutionError::NonZeroExit {
            status,
            stdout,
            stderr,
        });
    }

    Ok(ExecutionOutput {
        status,
        stdout,
        stderr,
    })
}
