//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces:
//! process executors, host platform detection and the config store.

pub mod config;
pub mod platform;
pub mod process;

// Re-export adapters
pub use config::XdgConfigStore;
pub use platform::{host_profile, resolve_profile};
pub use process::{create_executor, DryRunExecutor, ProcessExecutor, ShellExecutor};
