//! Notifiers: one-shot desktop alerts. Fire-and-forget, no acknowledgment.

use crate::errors::{AppError, AppResult};
use notify_rust::Notification;

pub trait Notifier {
    fn fire(&self, title: &str, body: &str, sound: &str) -> AppResult<()>;
}

/// Alerts through the platform notification service.
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn fire(&self, title: &str, body: &str, sound: &str) -> AppResult<()> {
        Notification::new()
            .summary(title)
            .body(body)
            .sound_name(sound)
            .show()
            .map_err(|e| AppError::Notify(e.to_string()))?;

        Ok(())
    }
}

/// Prints alerts to stdout instead of the notification service (test mode).
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn fire(&self, title: &str, body: &str, sound: &str) -> AppResult<()> {
        println!("🔔 {}: {} (sound: {})", title, body, sound);
        Ok(())
    }
}
