//! macOS idle probe: reads HIDIdleTime from the IOKit HID registry.

use super::IdleProbe;
use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::process::Command;
use std::time::Duration;

/// Samples by spawning `ioreg` and parsing the HIDIdleTime property
/// (nanoseconds since the last input event).
pub struct HidIdleProbe;

impl IdleProbe for HidIdleProbe {
    fn sample(&self) -> AppResult<Duration> {
        let out = Command::new("ioreg")
            .args(["-c", "IOHIDSystem", "-d", "4"])
            .output()
            .map_err(|e| AppError::Probe(format!("failed to run ioreg: {}", e)))?;

        if !out.status.success() {
            return Err(AppError::Probe(format!("ioreg exited with {}", out.status)));
        }

        let text = String::from_utf8_lossy(&out.stdout);
        let re = Regex::new(r#""HIDIdleTime"\s*=\s*(\d+)"#).unwrap();
        let nanos: u64 = re
            .captures(&text)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .ok_or_else(|| AppError::Probe("HIDIdleTime not found in ioreg output".to_string()))?;

        Ok(Duration::from_nanos(nanos))
    }
}
