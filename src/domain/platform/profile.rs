//! Platform profile value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidPlatformError;

use super::priority::PriorityValue;

/// Platforms with a known native notifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKind {
    /// macOS, notifications through `growlnotify`
    Darwin,
    /// Linux, notifications through `notify-send`
    Linux,
}

impl PlatformKind {
    /// Map an OS identifier (as in `std::env::consts::OS`) to a platform
    pub fn from_os(os: &str) -> Option<Self> {
        match os {
            "macos" | "darwin" | "Darwin" => Some(Self::Darwin),
            "linux" | "Linux" => Some(Self::Linux),
            _ => None,
        }
    }

    /// Get the string identifier for this platform
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Darwin => "darwin",
            Self::Linux => "linux",
        }
    }

    /// Build the notifier profile for this platform
    pub fn profile(self) -> PlatformProfile {
        match self {
            Self::Darwin => PlatformProfile::darwin(),
            Self::Linux => PlatformProfile::linux(),
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User preference for platform selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformPreference {
    /// Detect from the host OS
    #[default]
    Auto,
    /// Force a specific platform profile
    Fixed(PlatformKind),
}

impl fmt::Display for PlatformPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Fixed(kind) => write!(f, "{}", kind),
        }
    }
}

impl FromStr for PlatformPreference {
    type Err = InvalidPlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "darwin" | "macos" => Ok(Self::Fixed(PlatformKind::Darwin)),
            "linux" => Ok(Self::Fixed(PlatformKind::Linux)),
            _ => Err(InvalidPlatformError {
                input: s.to_string(),
            }),
        }
    }
}

/// Command name, flag vocabulary and priority range of one native notifier.
///
/// Profiles are immutable once built. The built-in ones come from
/// [`PlatformProfile::darwin`] and [`PlatformProfile::linux`]; tests may
/// construct synthetic ones directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformProfile {
    pub kind: PlatformKind,
    pub binary_name: String,
    pub message_flag: String,
    pub sticky_flag: Option<String>,
    pub wait_flag: Option<String>,
    pub identifier_flag: Option<String>,
    pub name_flag: Option<String>,
    pub priority_flag: String,
    pub priority_range: Vec<PriorityValue>,
}

impl PlatformProfile {
    /// Profile for `growlnotify` on macOS
    pub fn darwin() -> Self {
        Self {
            kind: PlatformKind::Darwin,
            binary_name: "growlnotify".to_string(),
            message_flag: "-m".to_string(),
            sticky_flag: Some("--sticky".to_string()),
            wait_flag: Some("-w".to_string()),
            identifier_flag: Some("-d".to_string()),
            name_flag: Some("--name".to_string()),
            priority_flag: "--priority".to_string(),
            priority_range: vec![
                PriorityValue::Int(-2),
                PriorityValue::Int(-1),
                PriorityValue::Int(0),
                PriorityValue::Int(1),
                PriorityValue::Int(2),
                PriorityValue::from("Very Low"),
                PriorityValue::from("Moderate"),
                PriorityValue::from("Normal"),
                PriorityValue::from("High"),
                PriorityValue::from("Emergency"),
            ],
        }
    }

    /// Profile for `notify-send` on Linux
    pub fn linux() -> Self {
        Self {
            kind: PlatformKind::Linux,
            binary_name: "notify-send".to_string(),
            message_flag: String::new(),
            // "-t 0" means no expiry timeout
            sticky_flag: Some("-t 0".to_string()),
            wait_flag: None,
            identifier_flag: None,
            name_flag: None,
            priority_flag: "-u".to_string(),
            priority_range: vec![
                PriorityValue::from("low"),
                PriorityValue::from("normal"),
                PriorityValue::from("critical"),
            ],
        }
    }

    /// Select the profile for an OS identifier, if the OS is supported
    pub fn for_os(os: &str) -> Option<Self> {
        PlatformKind::from_os(os).map(PlatformKind::profile)
    }
}
