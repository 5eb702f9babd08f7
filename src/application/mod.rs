//! Application layer - Use cases and port interfaces
//!
//! Contains the dispatch operation and trait definitions
//! for external system interactions.

pub mod dispatch;
pub mod ports;

// Re-export use cases
pub use dispatch::{build_command_line, DispatchError, Dispatcher};
