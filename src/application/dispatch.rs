//! Notification dispatch use case

use thiserror::Error;
use tracing::debug;

use crate::domain::notification::{image, CommandLine, NotificationRequest};
use crate::domain::platform::{PlatformKind, PlatformProfile};

use super::ports::{CommandExecutor, ExecutionError, ExecutionOutput};

/// Errors from the dispatch use case
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("growl not supported on this platform")]
    UnsupportedPlatform,

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

/// Translate a request into the argument grammar of `profile`.
///
/// The token order is fixed: image, sticky, priority, name, wait,
/// identifier, then message and title. Empty image, name, identifier
/// and title values count as unset.
pub fn build_command_line(profile: &PlatformProfile, request: &NotificationRequest) -> CommandLine {
    let mut line = CommandLine::new(profile.binary_name.clone());

    if let Some(img) = non_empty(&request.image) {
        match profile.kind {
            PlatformKind::Darwin => {
                let (flag, value) = image::classify(img);
                line.push(flag.as_flag());
                line.push(value);
            }
            PlatformKind::Linux => line.push(format!("-i {}", img)),
        }
    }

    if request.sticky {
        if let Some(ref flag) = profile.sticky_flag {
            line.push(flag.clone());
        }
    }

    if let Some(ref priority) = request.priority {
        if priority.is_in(&profile.priority_range) {
            line.push(profile.priority_flag.clone());
            line.push(priority.to_string());
        } else {
            debug!(%priority, platform = %profile.kind, "dropping priority outside allowed range");
        }
    }

    if let (Some(name), Some(flag)) = (non_empty(&request.name), &profile.name_flag) {
        line.push(flag.clone());
        line.push(name);
    }

    if request.wait {
        if let Some(ref flag) = profile.wait_flag {
            line.push(flag.clone());
        }
    }

    if let (Some(identifier), Some(flag)) = (non_empty(&request.identifier), &profile.identifier_flag) {
        line.push(format!("{} {}", flag, identifier));
    }

    match profile.kind {
        PlatformKind::Darwin => {
            line.push(profile.message_flag.clone());
            line.push(format!("\"{}\"", request.message));
            if let Some(title) = non_empty(&request.title) {
                line.push(title);
            }
        }
        PlatformKind::Linux => {
            if let Some(title) = non_empty(&request.title) {
                line.push(format!("'{}'", title));
                line.push(profile.message_flag.clone());
            }
            line.push(format!("'{}'", request.message));
        }
    }

    line
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Forwards notification requests to the native notifier of one platform
pub struct Dispatcher<E>
where
    E: CommandExecutor,
{
    profile: Option<PlatformProfile>,
    executor: E,
}

impl<E> Dispatcher<E>
where
    E: CommandExecutor,
{
    /// Create a dispatcher. A `None` profile means the platform is unsupported.
    pub fn new(profile: Option<PlatformProfile>, executor: E) -> Self {
        Self { profile, executor }
    }

    /// Build the command line for a request without running it
    pub fn build_args(&self, request: &NotificationRequest) -> Result<CommandLine, DispatchError> {
        let profile = self
            .profile
            .as_ref()
            .ok_or(DispatchError::UnsupportedPlatform)?;
        Ok(build_command_line(profile, request))
    }

    /// Build the command line for a request and run it.
    ///
    /// Exactly one process is started per call, none if the platform is
    /// unsupported. Executor failures are returned unchanged.
    pub async fn dispatch(
        &self,
        request: &NotificationRequest,
    ) -> Result<ExecutionOutput, DispatchError> {
        let command = self.build_args(request)?;
        debug!(command = %command, "dispatching notification");
        Ok(self.executor.execute(&command).await?)
    }
}
