//! Main app runner for one-shot notifications

use std::process::ExitCode;

use tracing::debug;

use crate::application::ports::{CommandExecutor, ConfigStore};
use crate::application::{DispatchError, Dispatcher};
use crate::domain::config::{AppConfig, ExecutorKind};
use crate::domain::notification::NotificationRequest;
use crate::domain::platform::PlatformPreference;
use crate::infrastructure::{create_executor, resolve_profile, DryRunExecutor};

use super::args::NotifyOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Build the notification request from the message and merged config
pub fn build_request(
    message: &str,
    identifier: Option<&str>,
    config: &AppConfig,
) -> NotificationRequest {
    NotificationRequest {
        message: message.to_string(),
        title: config.title().map(str::to_string),
        sticky: config.sticky_or_default(),
        priority: config.priority(),
        name: config.name().map(str::to_string),
        wait: config.wait_or_default(),
        identifier: identifier.map(str::to_string),
        image: config.image().map(str::to_string),
    }
}

/// Send one notification
pub async fn run_notify(options: NotifyOptions) -> ExitCode {
    let presenter = Presenter::new();

    // An explicit but unknown platform is a usage error, not "unsupported"
    if let Some(Err(e)) = options.config.platform.as_deref().map(str::parse::<PlatformPreference>) {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_USAGE_ERROR);
    }
    if let Some(Err(e)) = options.config.executor.as_deref().map(str::parse::<ExecutorKind>) {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    let preference = options.config.platform_or_default();
    let profile = resolve_profile(preference);
    debug!(%preference, binary = ?profile.as_ref().map(|p| p.binary_name.as_str()), "selected platform profile");

    let request = build_request(
        &options.message,
        options.identifier.as_deref(),
        &options.config,
    );

    if options.dry_run {
        let executor = DryRunExecutor::new();
        let dispatcher = Dispatcher::new(profile, executor.clone());
        return match dispatcher.dispatch(&request).await {
            Ok(_) => {
                for command in executor.recorded() {
                    presenter.command(&command);
                }
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => report(&presenter, &e),
        };
    }

    let executor = create_executor(options.config.executor_or_default());
    send(&presenter, Dispatcher::new(profile, executor), &request).await
}

async fn send<E: CommandExecutor>(
    presenter: &Presenter,
    dispatcher: Dispatcher<E>,
    request: &NotificationRequest,
) -> ExitCode {
    match dispatcher.dispatch(request).await {
        Ok(output) => {
            presenter.passthrough(&output.stdout);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => report(presenter, &e),
    }
}

fn report(presenter: &Presenter, error: &DispatchError) -> ExitCode {
    presenter.error(&error.to_string());
    ExitCode::from(EXIT_ERROR)
}

/// Load and merge configuration from file and CLI.
///
/// Environment variables reach the CLI layer through clap.
pub async fn load_merged_config<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = store.load_or_empty().await;

    // Merge: defaults < file < env/cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}
