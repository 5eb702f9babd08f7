//! Configuration domain module

mod app_config;
mod executor_kind;

pub use app_config::{AppConfig, NotificationDefaults};
pub use executor_kind::ExecutorKind;
