//! rBreakAlert library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod notify;
pub mod probe;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Watch { .. } => cli::commands::watch::handle(cli, cfg),
        Commands::Idle => cli::commands::idle::handle(cli),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the configuration once; --config overrides the standard path.
    let custom = cli.config.as_deref().map(expand_tilde);
    let cfg = Config::load_from(custom.as_deref())?;

    dispatch(&cli, &cfg)
}
