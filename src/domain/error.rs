//! Domain error types

use thiserror::Error;

/// Error when an invalid platform name is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid platform: \"{input}\". Valid platforms are: auto, darwin, linux")]
pub struct InvalidPlatformError {
    pub input: String,
}

/// Error when an invalid executor name is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid executor: \"{input}\". Valid executors are: direct, shell")]
pub struct InvalidExecutorError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
