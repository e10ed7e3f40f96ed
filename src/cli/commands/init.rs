use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with the default thresholds
pub fn handle(cli: &Cli) -> AppResult<()> {
    let custom = cli.config.as_deref().map(expand_tilde);
    let path = Config::init_all(custom.as_deref(), cli.test)?;

    println!("⚙️  Initializing rBreakAlert…");
    println!("📄 Config file : {}", path.display());

    let cfg = Config::load_from(Some(&path))?;
    println!(
        "⏱️  Break after {} idle, reminder after {} active (every {})",
        cfg.break_length, cfg.break_alert_interval, cfg.notify_every
    );

    println!("🎉 rBreakAlert initialization completed!");
    Ok(())
}
