//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::config::{AppConfig, NotificationDefaults};

/// growl - desktop notifications through the native notifier
#[derive(Parser, Debug)]
#[command(name = "growl")]
#[command(version)]
#[command(about = "Send a desktop notification through growlnotify (macOS) or notify-send (Linux)")]
#[command(long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Notification message
    #[arg(required = true)]
    pub message: Option<String>,

    /// Notification title
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Keep the notification until dismissed
    #[arg(short = 's', long)]
    pub sticky: bool,

    /// Priority (darwin: -2..2, Very Low, Moderate, Normal, High, Emergency; linux: low, normal, critical)
    #[arg(short = 'p', long, allow_negative_numbers = true)]
    pub priority: Option<String>,

    /// Application name (darwin only)
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Wait until the notification is dismissed (darwin only)
    #[arg(short = 'w', long)]
    pub wait: bool,

    /// Identifier for coalescing notifications (darwin only)
    #[arg(short = 'i', long)]
    pub identifier: Option<String>,

    /// Icon: .icns path, application name, image path, or file type
    #[arg(long, value_name = "IMAGE")]
    pub image: Option<String>,

    /// Notifier platform profile (auto, darwin, linux)
    #[arg(long, value_name = "PLATFORM", env = "GROWL_PLATFORM")]
    pub platform: Option<String>,

    /// How the notifier is run: direct (one argv entry per token) or
    /// shell (`sh -c` on the joined line, the legacy invocation; on linux
    /// it splits `-i <img>` and strips quotes the way notify-send expects)
    #[arg(long, value_name = "EXECUTOR", env = "GROWL_EXECUTOR")]
    pub executor: Option<String>,

    /// Print the notifier command line instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file location
    #[arg(long = "config-file", value_name = "PATH", env = "GROWL_CONFIG", global = true)]
    pub config_file: Option<PathBuf>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Config layer built from command-line flags.
    /// Flags that were not given stay `None` so they don't override the file.
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            platform: self.platform.clone(),
            executor: self.executor.clone(),
            notification: Some(NotificationDefaults {
                title: self.title.clone(),
                sticky: self.sticky.then_some(true),
                priority: self.priority.clone(),
                name: self.name.clone(),
                wait: self.wait.then_some(true),
                image: self.image.clone(),
            }),
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed notify options
#[derive(Debug, Clone)]
pub struct NotifyOptions {
    pub message: String,
    pub identifier: Option<String>,
    pub dry_run: bool,
    pub config: AppConfig,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "platform",
    "executor",
    "notification.title",
    "notification.sticky",
    "notification.priority",
    "notification.name",
    "notification.wait",
    "notification.image",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
