//! Platform domain module

mod priority;
mod profile;

pub use priority::PriorityValue;
pub use profile::{PlatformKind, PlatformPreference, PlatformProfile};
