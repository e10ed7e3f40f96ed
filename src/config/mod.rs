use crate::core::tracker::{AlertContent, Thresholds};
use crate::errors::{AppError, AppResult};
use crate::utils::parse_duration;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_reminder_title")]
    pub reminder_title: String,
    #[serde(default = "default_reminder_body")]
    pub reminder_body: String,
    #[serde(default = "default_break_over_body")]
    pub break_over_body: String,
    #[serde(default = "default_sound_on_reminder")]
    pub sound_on_reminder: String,
    #[serde(default = "default_sound_on_break_end")]
    pub sound_on_break_end: String,
    #[serde(default = "default_break_length")]
    pub break_length: String,
    #[serde(default = "default_break_alert_interval")]
    pub break_alert_interval: String,
    #[serde(default = "default_notify_every")]
    pub notify_every: String,
    #[serde(default = "default_idle_after")]
    pub idle_after: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval: String,
}

fn default_reminder_title() -> String {
    "Take a break".to_string()
}
fn default_reminder_body() -> String {
    "40 minutes passed since your last break.".to_string()
}
fn default_break_over_body() -> String {
    "Break complete. Welcome back!".to_string()
}
fn default_sound_on_reminder() -> String {
    "Blow".to_string()
}
fn default_sound_on_break_end() -> String {
    "Glass".to_string()
}
fn default_break_length() -> String {
    "5m".to_string()
}
fn default_break_alert_interval() -> String {
    "40m".to_string()
}
fn default_notify_every() -> String {
    "5m".to_string()
}
fn default_idle_after() -> String {
    "2m".to_string()
}
fn default_poll_interval() -> String {
    "1s".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reminder_title: default_reminder_title(),
            reminder_body: default_reminder_body(),
            break_over_body: default_break_over_body(),
            sound_on_reminder: default_sound_on_reminder(),
            sound_on_break_end: default_sound_on_break_end(),
            break_length: default_break_length(),
            break_alert_interval: default_break_alert_interval(),
            notify_every: default_notify_every(),
            idle_after: default_idle_after(),
            poll_interval: default_poll_interval(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rbreakalert")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rbreakalert")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbreakalert.conf")
    }

    /// Load configuration from `path`, or from the standard location when
    /// `None`. A missing file yields the defaults.
    pub fn load_from(path: Option<&Path>) -> AppResult<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_file(),
        };

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Initialize the configuration file (init command). Returns the path
    /// that was (or would have been) written.
    pub fn init_all(path: Option<&Path>, is_test: bool) -> AppResult<PathBuf> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_file(),
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&Config::default()).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(&path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(path)
    }

    /// Parse the duration fields into the tracker threshold set.
    pub fn thresholds(&self) -> AppResult<Thresholds> {
        Ok(Thresholds {
            break_length: parse_duration(&self.break_length)?,
            break_alert_interval: parse_duration(&self.break_alert_interval)?,
            notify_every: parse_duration(&self.notify_every)?,
            idle_after: parse_duration(&self.idle_after)?,
        })
    }

    /// Parse the poll loop sleep interval.
    pub fn poll(&self) -> AppResult<Duration> {
        parse_duration(&self.poll_interval)
    }

    /// Notification texts and sound names, as configured.
    pub fn alerts(&self) -> AlertContent {
        AlertContent {
            reminder_title: self.reminder_title.clone(),
            reminder_body: self.reminder_body.clone(),
            break_over_body: self.break_over_body.clone(),
            sound_on_reminder: self.sound_on_reminder.clone(),
            sound_on_break_end: self.sound_on_break_end.clone(),
        }
    }
}
