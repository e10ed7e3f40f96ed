//! Activity state machine: turns raw idle-duration samples into break and
//! reminder decisions, one poll tick at a time.

use crate::notify::Notifier;
use crate::probe::IdleProbe;
use crate::ui::messages;
use crate::utils::colors;
use crate::utils::format_duration;
use std::time::{Duration, Instant};

/// Threshold set driving the state machine, fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    /// Minimum idle time for an idle stretch to count as a completed break.
    pub break_length: Duration,
    /// Maximum active time before a reminder is due.
    pub break_alert_interval: Duration,
    /// Minimum spacing between two reminders.
    pub notify_every: Duration,
    /// Minimum idle time to consider the user idle.
    pub idle_after: Duration,
}

/// Notification texts and sound names.
#[derive(Debug, Clone)]
pub struct AlertContent {
    pub reminder_title: String,
    pub reminder_body: String,
    pub break_over_body: String,
    pub sound_on_reminder: String,
    pub sound_on_break_end: String,
}

/// Owns the derived activity state and the two collaborators.
/// Mutated exclusively by [`ActivityTracker::check`], from a single thread.
pub struct ActivityTracker {
    thresholds: Thresholds,
    alerts: AlertContent,
    probe: Box<dyn IdleProbe>,
    notifier: Box<dyn Notifier>,
    verbose: bool,

    last_break_end: Instant,
    last_notified: Instant,
    is_idle: bool,
    in_break: bool,
}

impl ActivityTracker {
    pub fn new(
        thresholds: Thresholds,
        alerts: AlertContent,
        probe: Box<dyn IdleProbe>,
        notifier: Box<dyn Notifier>,
        now: Instant,
    ) -> Self {
        Self {
            thresholds,
            alerts,
            probe,
            notifier,
            verbose: false,
            last_break_end: now,
            last_notified: now,
            is_idle: false,
            in_break: false,
        }
    }

    /// Emit a timestamped state line on every tick.
    pub fn verbose(mut self, on: bool) -> Self {
        self.verbose = on;
        self
    }

    pub fn is_idle(&self) -> bool {
        self.is_idle
    }

    pub fn in_break(&self) -> bool {
        self.in_break
    }

    pub fn last_break_end(&self) -> Instant {
        self.last_break_end
    }

    pub fn last_notified(&self) -> Instant {
        self.last_notified
    }

    /// One poll tick.
    ///
    /// Samples the idle probe and updates the derived state, firing at most
    /// one break-completion alert per rising edge of the break flag and at
    /// most one reminder per `notify_every`. `now` is caller-supplied so the
    /// whole machine is deterministic under test; a non-monotonic `now` only
    /// produces zero spans that fail the threshold comparisons.
    pub fn check(&mut self, now: Instant) {
        let active_span = now.saturating_duration_since(self.last_break_end);
        let silence_span = now.saturating_duration_since(self.last_notified);

        // A failed sample means "no new information": skip the whole tick
        // rather than treating it as zero idle time, which would end a break
        // early or cancel a pending reminder.
        let idle = match self.probe.sample() {
            Ok(d) => d,
            Err(e) => {
                messages::warning(format!("idle sample skipped: {}", e));
                return;
            }
        };

        let in_break_now = idle > self.thresholds.break_length;
        if in_break_now {
            if !self.in_break {
                self.fire(&self.alerts.break_over_body, &self.alerts.sound_on_break_end);
            }
            // Re-armed on every tick while idleness persists, so the active
            // span starts counting from the moment the break actually ends.
            self.last_break_end = now;
        }
        self.in_break = in_break_now;

        self.is_idle = idle > self.thresholds.idle_after;

        if !self.is_idle
            && active_span > self.thresholds.break_alert_interval
            && silence_span > self.thresholds.notify_every
        {
            self.fire(&self.alerts.reminder_body, &self.alerts.sound_on_reminder);
            self.last_notified = now;
        }

        if self.verbose {
            let state = if self.in_break {
                "break"
            } else if self.is_idle {
                "idle"
            } else {
                "active"
            };
            messages::tick(format!(
                "{}{}{} (idle {})",
                colors::color_for_state(self.is_idle, self.in_break),
                state,
                colors::RESET,
                format_duration(idle)
            ));
        }
    }

    // A failed notification never stops the loop.
    fn fire(&self, body: &str, sound: &str) {
        if let Err(e) = self.notifier.fire(&self.alerts.reminder_title, body, sound) {
            messages::warning(format!("notification failed: {}", e));
        }
    }
}
