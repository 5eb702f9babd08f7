//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, ExecutorKind, NotificationDefaults};
use crate::domain::error::ConfigError;
use crate::domain::platform::{PlatformPreference, PlatformProfile, PriorityValue};

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => {
            presenter.output(&store.path().display().to_string());
            Ok(())
        }
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load().await?;
    set_value(&mut config, key, value)?;
    store.save(&config).await?;

    presenter.success(&format!("{} = {}", key, value));
    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    presenter.output(get_value(&config, key).as_deref().unwrap_or(NOT_SET));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;
    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, get_value(&config, key).as_deref().unwrap_or(NOT_SET));
    }
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

fn notification_mut(config: &mut AppConfig) -> &mut NotificationDefaults {
    config.notification.get_or_insert_with(NotificationDefaults::default)
}

/// Read a config value as a display string
fn get_value(config: &AppConfig, key: &str) -> Option<String> {
    let notification = config.notification.as_ref();
    match key {
        "platform" => config.platform.clone(),
        "executor" => config.executor.clone(),
        "notification.title" => notification.and_then(|n| n.title.clone()),
        "notification.sticky" => notification.and_then(|n| n.sticky).map(|b| b.to_string()),
        "notification.priority" => notification.and_then(|n| n.priority.clone()),
        "notification.name" => notification.and_then(|n| n.name.clone()),
        "notification.wait" => notification.and_then(|n| n.wait).map(|b| b.to_string()),
        "notification.image" => notification.and_then(|n| n.image.clone()),
        _ => None,
    }
}

/// Store an already validated config value
fn set_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "platform" => config.platform = Some(value.to_lowercase()),
        "executor" => config.executor = Some(value.to_lowercase()),
        "notification.title" => notification_mut(config).title = Some(value.to_string()),
        "notification.sticky" => notification_mut(config).sticky = Some(bool_value(key, value)?),
        "notification.priority" => notification_mut(config).priority = Some(value.to_string()),
        "notification.name" => notification_mut(config).name = Some(value.to_string()),
        "notification.wait" => notification_mut(config).wait = Some(bool_value(key, value)?),
        "notification.image" => notification_mut(config).image = Some(value.to_string()),
        _ => return check_key(key),
    }
    Ok(())
}

/// Validate a config value based on its key
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "platform" => {
            value
                .parse::<PlatformPreference>()
                .map_err(|e| invalid(e.to_string()))?;
        }
        "executor" => {
            value
                .parse::<ExecutorKind>()
                .map_err(|e| invalid(e.to_string()))?;
        }
        "notification.sticky" | "notification.wait" => {
            bool_value(key, value)?;
        }
        "notification.priority" => {
            let priority = value
                .parse::<PriorityValue>()
                .map_err(|e| invalid(e.to_string()))?;
            let known = [PlatformProfile::darwin(), PlatformProfile::linux()]
                .iter()
                .any(|p| priority.is_in(&p.priority_range));
            if !known {
                return Err(invalid(format!(
                    "Priority '{}' is not accepted by any notifier",
                    value
                )));
            }
        }
        _ => {} // free-form strings
    }
    Ok(())
}

fn bool_value(key: &str, value: &str) -> Result<bool, ConfigError> {
    parse_bool(value).map_err(|_| ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be 'true' or 'false'".to_string(),
    })
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}
