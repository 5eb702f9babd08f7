//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod executor;

// Re-export common types
pub use config::ConfigStore;
pub use executor::{CommandExecutor, ExecutionError, ExecutionOutput};
