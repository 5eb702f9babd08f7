//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod notification;
pub mod platform;

// Re-export common types
pub use config::{AppConfig, ExecutorKind};
pub use error::*;
pub use notification::{CommandLine, ImageFlag, NotificationRequest};
pub use platform::{PlatformKind, PlatformPreference, PlatformProfile, PriorityValue};
