//! Idle probes: elapsed time since the user's last input-device activity.

use crate::errors::AppResult;
use std::time::Duration;

pub mod sim;

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "macos")]
pub mod macos;

/// A source of "how long has the user been inactive" samples.
///
/// Treated as a possibly-slow, possibly-failing external oracle: a sample
/// may spawn a child process and blocks the caller for its duration.
pub trait IdleProbe {
    fn sample(&self) -> AppResult<Duration>;
}

/// Build the idle probe for the current platform.
#[cfg(target_os = "linux")]
pub fn native_probe() -> AppResult<Box<dyn IdleProbe>> {
    Ok(Box::new(linux::X11IdleProbe::connect()?))
}

#[cfg(target_os = "macos")]
pub fn native_probe() -> AppResult<Box<dyn IdleProbe>> {
    Ok(Box::new(macos::HidIdleProbe))
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub fn native_probe() -> AppResult<Box<dyn IdleProbe>> {
    Err(crate::errors::AppError::Probe(
        "no idle probe available on this platform".to_string(),
    ))
}
