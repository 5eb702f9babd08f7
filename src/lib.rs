//! growl - desktop notifications through the host's native notifier
//!
//! Translates a platform-agnostic notification request into the command
//! line of `growlnotify` (macOS) or `notify-send` (Linux) and runs it.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Platform profiles, notification requests, config values and errors
//! - **Application**: The dispatch use case and port interfaces (traits)
//! - **Infrastructure**: Process executors, platform detection, config store
//! - **CLI**: Command-line interface, argument parsing, and output

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
