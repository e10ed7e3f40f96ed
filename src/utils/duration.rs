//! Duration utilities: parsing human-readable durations ("90s", "40m",
//! "1h30m", "250ms") and formatting them back.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::time::Duration;

pub fn parse_duration(s: &str) -> AppResult<Duration> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidDuration(s.to_string()));
    }

    // Bare number means seconds ("40" → 40s)
    if let Ok(secs) = trimmed.parse::<u64>() {
        return Ok(Duration::from_secs(secs));
    }

    // Millisecond form, used mostly for the poll interval ("250ms")
    let re_ms = Regex::new(r"^(\d+)ms$").unwrap();
    if let Some(caps) = re_ms.captures(trimmed) {
        let ms: u64 = caps[1]
            .parse()
            .map_err(|_| AppError::InvalidDuration(s.to_string()))?;
        return Ok(Duration::from_millis(ms));
    }

    let re = Regex::new(r"^(?:(\d+)h)?\s*(?:(\d+)m)?\s*(?:(\d+)s)?$").unwrap();
    let caps = re
        .captures(trimmed)
        .ok_or_else(|| AppError::InvalidDuration(s.to_string()))?;
    if caps.get(1).is_none() && caps.get(2).is_none() && caps.get(3).is_none() {
        return Err(AppError::InvalidDuration(s.to_string()));
    }

    let part = |i: usize| -> AppResult<u64> {
        match caps.get(i) {
            Some(m) => m
                .as_str()
                .parse()
                .map_err(|_| AppError::InvalidDuration(s.to_string())),
            None => Ok(0),
        }
    };
    let hours = part(1)?;
    let mins = part(2)?;
    let secs = part(3)?;

    Ok(Duration::from_secs(hours * 3600 + mins * 60 + secs))
}

pub fn format_duration(d: Duration) -> String {
    let total = d.as_secs();
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;

    if h > 0 {
        format!("{}h {:02}m {:02}s", h, m, s)
    } else if m > 0 {
        format!("{}m {:02}s", m, s)
    } else {
        format!("{}s", s)
    }
}
