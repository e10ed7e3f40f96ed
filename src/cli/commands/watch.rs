use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::tracker::ActivityTracker;
use crate::errors::AppResult;
use crate::notify::{ConsoleNotifier, DesktopNotifier, Notifier};
use crate::probe::{self, IdleProbe};
use crate::ui::messages;
use crate::utils::{format_duration, parse_duration};
use std::thread;
use std::time::Instant;

/// Handle the `watch` command: the poll loop.
///
/// One tracker instance lives for the whole run; the loop sleeps the poll
/// interval, then hands the current time to the tracker. Runs until
/// externally terminated (or after one tick under --once).
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch {
        once,
        verbose,
        interval,
        break_length,
        alert_after,
        notify_every,
        idle_after,
        title,
        body,
        sound,
        break_sound,
    } = &cli.command
    {
        // Config values first, then per-run flag overrides.
        let mut thresholds = cfg.thresholds()?;
        if let Some(d) = break_length {
            thresholds.break_length = parse_duration(d)?;
        }
        if let Some(d) = alert_after {
            thresholds.break_alert_interval = parse_duration(d)?;
        }
        if let Some(d) = notify_every {
            thresholds.notify_every = parse_duration(d)?;
        }
        if let Some(d) = idle_after {
            thresholds.idle_after = parse_duration(d)?;
        }

        let poll = match interval {
            Some(d) => parse_duration(d)?,
            None => cfg.poll()?,
        };

        let mut alerts = cfg.alerts();
        if let Some(t) = title {
            alerts.reminder_title = t.clone();
        }
        if let Some(b) = body {
            alerts.reminder_body = b.clone();
        }
        if let Some(s) = sound {
            alerts.sound_on_reminder = s.clone();
        }
        if let Some(s) = break_sound {
            alerts.sound_on_break_end = s.clone();
        }

        let probe: Box<dyn IdleProbe> = if cli.test {
            Box::new(probe::sim::SimulatedProbe)
        } else {
            probe::native_probe()?
        };
        let notifier: Box<dyn Notifier> = if cli.test {
            Box::new(ConsoleNotifier)
        } else {
            Box::new(DesktopNotifier)
        };

        messages::info(format!(
            "watching: break after {} idle, reminder after {} active (every {}), idle after {}, polling every {}",
            format_duration(thresholds.break_length),
            format_duration(thresholds.break_alert_interval),
            format_duration(thresholds.notify_every),
            format_duration(thresholds.idle_after),
            format_duration(poll)
        ));

        let mut tracker =
            ActivityTracker::new(thresholds, alerts, probe, notifier, Instant::now()).verbose(*verbose);

        loop {
            thread::sleep(poll);
            tracker.check(Instant::now());

            if *once {
                break;
            }
        }
    }

    Ok(())
}
