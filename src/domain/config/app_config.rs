//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::platform::{PlatformPreference, PriorityValue};

use super::executor_kind::ExecutorKind;

/// Default values applied to every notification unless overridden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationDefaults {
    pub title: Option<String>,
    pub sticky: Option<bool>,
    pub priority: Option<String>,
    pub name: Option<String>,
    pub wait: Option<bool>,
    pub image: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub platform: Option<String>,
    pub executor: Option<String>,
    pub notification: Option<NotificationDefaults>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            platform: Some("auto".to_string()),
            executor: Some("direct".to_string()),
            notification: Some(NotificationDefaults {
                sticky: Some(false),
                wait: Some(false),
                ..Default::default()
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            platform: other.platform.or(self.platform),
            executor: other.executor.or(self.executor),
            notification: Self::merge_notification(self.notification, other.notification),
        }
    }

    fn merge_notification(
        base: Option<NotificationDefaults>,
        other: Option<NotificationDefaults>,
    ) -> Option<NotificationDefaults> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(NotificationDefaults {
                title: o.title.or(b.title),
                sticky: o.sticky.or(b.sticky),
                priority: o.priority.or(b.priority),
                name: o.name.or(b.name),
                wait: o.wait.or(b.wait),
                image: o.image.or(b.image),
            }),
        }
    }

    /// Get platform preference, or auto if not set/invalid
    pub fn platform_or_default(&self) -> PlatformPreference {
        self.platform
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get executor kind, or direct if not set/invalid
    pub fn executor_or_default(&self) -> ExecutorKind {
        self.executor
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    fn notification(&self) -> Option<&NotificationDefaults> {
        self.notification.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.notification().and_then(|n| n.title.as_deref())
    }

    pub fn name(&self) -> Option<&str> {
        self.notification().and_then(|n| n.name.as_deref())
    }

    pub fn image(&self) -> Option<&str> {
        self.notification().and_then(|n| n.image.as_deref())
    }

    /// Get priority as a parsed value, if set
    pub fn priority(&self) -> Option<PriorityValue> {
        self.notification()
            .and_then(|n| n.priority.as_deref())
            .and_then(|s| s.parse().ok())
    }

    /// Get sticky setting, or false if not set
    pub fn sticky_or_default(&self) -> bool {
        self.notification().and_then(|n| n.sticky).unwrap_or(false)
    }

    /// Get wait setting, or false if not set
    pub fn wait_or_default(&self) -> bool {
        self.notification().and_then(|n| n.wait).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::platform::PlatformKind;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.platform, Some("auto".to_string()));
        assert_eq!(config.executor, Some("direct".to_string()));
        assert!(!config.sticky_or_default());
        assert!(!config.wait_or_default());
        assert!(config.title().is_none());
        assert!(config.priority().is_none());
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.platform.is_none());
        assert!(config.executor.is_none());
        assert!(config.notification.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            platform: Some("linux".to_string()),
            executor: Some("shell".to_string()),
            ..Default::default()
        };
        let other = AppConfig {
            platform: Some("darwin".to_string()),
            executor: None,
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.platform, Some("darwin".to_string()));
        assert_eq!(merged.executor, Some("shell".to_string()));
    }

    #[test]
    fn merge_notification_fields() {
        let base = AppConfig {
            notification: Some(NotificationDefaults {
                title: Some("Base".to_string()),
                name: Some("Builder".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let other = AppConfig {
            notification: Some(NotificationDefaults {
                title: Some("Other".to_string()),
                sticky: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.title(), Some("Other"));
        assert_eq!(merged.name(), Some("Builder"));
        assert!(merged.sticky_or_default());
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            notification: Some(NotificationDefaults {
                image: Some("Dock".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let merged = base.merge(AppConfig::empty());
        assert_eq!(merged.image(), Some("Dock"));
    }

    #[test]
    fn platform_or_default_parses() {
        let config = AppConfig {
            platform: Some("linux".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.platform_or_default(),
            PlatformPreference::Fixed(PlatformKind::Linux)
        );
    }

    #[test]
    fn platform_or_default_uses_auto_on_invalid() {
        let config = AppConfig {
            platform: Some("beos".to_string()),
            ..Default::default()
        };
        assert_eq!(config.platform_or_default(), PlatformPreference::Auto);
    }

    #[test]
    fn executor_or_default_parses() {
        let config = AppConfig {
            executor: Some("shell".to_string()),
            ..Default::default()
        };
        assert_eq!(config.executor_or_default(), ExecutorKind::Shell);
        assert_eq!(AppConfig::empty().executor_or_default(), ExecutorKind::Direct);
    }

    #[test]
    fn priority_parses_numbers_and_names() {
        let numeric = AppConfig {
            notification: Some(NotificationDefaults {
                priority: Some("2".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(numeric.priority(), Some(PriorityValue::Int(2)));

        let named = AppConfig {
            notification: Some(NotificationDefaults {
                priority: Some("critical".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(named.priority(), Some(PriorityValue::from("critical")));
    }
}
