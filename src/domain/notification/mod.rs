//! Notification domain module

mod command_line;
pub mod image;
mod request;

pub use command_line::CommandLine;
pub use image::ImageFlag;
pub use request::NotificationRequest;
