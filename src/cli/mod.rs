//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, log setup,
//! and the main application runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod logging;
pub mod presenter;

// Re-export commonly used types
pub use app::{run_notify, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, NotifyOptions};
pub use presenter::Presenter;
