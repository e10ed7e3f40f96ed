//! Simulated idle probe, selected by the hidden `--test` flag.

use super::IdleProbe;
use crate::errors::{AppError, AppResult};
use std::env;
use std::time::Duration;

/// Environment variable holding the simulated idle time, in whole seconds.
pub const IDLE_ENV: &str = "RBREAKALERT_IDLE_SECS";

/// Reads `RBREAKALERT_IDLE_SECS` on every sample, so a driving process can
/// change the value between ticks.
pub struct SimulatedProbe;

impl IdleProbe for SimulatedProbe {
    fn sample(&self) -> AppResult<Duration> {
        let raw = env::var(IDLE_ENV).map_err(|_| AppError::Probe(format!("{} is not set", IDLE_ENV)))?;
        let secs: u64 = raw
            .parse()
            .map_err(|_| AppError::Probe(format!("cannot parse {}={}", IDLE_ENV, raw)))?;

        Ok(Duration::from_secs(secs))
    }
}
