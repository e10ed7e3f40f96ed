use crate::cli::parser::Cli;
use crate::errors::AppResult;
use crate::probe::{self, IdleProbe};
use crate::utils::format_duration;

/// Handle the `idle` command: one probe sample, printed.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let probe: Box<dyn IdleProbe> = if cli.test {
        Box::new(probe::sim::SimulatedProbe)
    } else {
        probe::native_probe()?
    };

    let idle = probe.sample()?;
    println!("⏱️  Idle for {}", format_duration(idle));

    Ok(())
}
