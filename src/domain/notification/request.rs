//! Notification request value object

use crate::domain::platform::PriorityValue;

/// A single notification to dispatch.
/// Every field except the message defaults to disabled/absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationRequest {
    pub message: String,
    pub title: Option<String>,
    pub sticky: bool,
    pub priority: Option<PriorityValue>,
    /// Application name (growlnotify only)
    pub name: Option<String>,
    /// Block until the notification is dismissed (growlnotify only)
    pub wait: bool,
    /// Coalescing identifier (growlnotify only)
    pub identifier: Option<String>,
    pub image: Option<String>,
}

impl NotificationRequest {
    /// Create a request with only a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    pub fn with_priority(mut self, priority: impl Into<PriorityValue>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_wait(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
