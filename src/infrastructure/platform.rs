//! Host platform detection

use std::env;
use std::sync::OnceLock;

use tracing::debug;

use crate::domain::platform::{PlatformPreference, PlatformProfile};

static HOST_PROFILE: OnceLock<Option<PlatformProfile>> = OnceLock::new();

/// Profile of the host OS, detected on first use and cached for the process
pub fn host_profile() -> Option<&'static PlatformProfile> {
    HOST_PROFILE
        .get_or_init(|| {
            let os = env::consts::OS;
            let profile = PlatformProfile::for_os(os);
            debug!(os, supported = profile.is_some(), "detected host platform");
            profile
        })
        .as_ref()
}

/// Resolve the profile to use for a platform preference
pub fn resolve_profile(preference: PlatformPreference) -> Option<PlatformProfile> {
    match preference {
        PlatformPreference::Auto => host_profile().cloned(),
        PlatformPreference::Fixed(kind) => Some(kind.profile()),
    }
}
