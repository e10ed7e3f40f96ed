use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::parse_duration;
use crate::utils::path::expand_tilde;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = cli
            .config
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(Config::config_file);

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigSave)?
            );
        }

        // ---- CHECK CONFIG ----
        if *check {
            let fields = [
                ("break_length", &cfg.break_length),
                ("break_alert_interval", &cfg.break_alert_interval),
                ("notify_every", &cfg.notify_every),
                ("idle_after", &cfg.idle_after),
                ("poll_interval", &cfg.poll_interval),
            ];

            let mut bad = 0;
            for (name, value) in fields {
                match parse_duration(value) {
                    Ok(_) => messages::success(format!("{} = {}", name, value)),
                    Err(_) => {
                        messages::error(format!("{} = {} (invalid duration)", name, value));
                        bad += 1;
                    }
                }
            }

            if bad > 0 {
                return Err(AppError::Config(format!("{} invalid duration field(s)", bad)));
            }
            messages::success("Configuration is valid");
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            // User-requested editor (e.g. --editor vim)
            let requested_editor = editor.clone();

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

            let status = Command::new(&editor_to_use).arg(&path).status();

            match status {
                Ok(s) if s.success() => {
                    messages::success(format!(
                        "Configuration file edited successfully using '{}'",
                        editor_to_use
                    ));
                }
                Ok(_) | Err(_) => {
                    messages::warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));

                    let fallback_status = Command::new(&default_editor).arg(&path).status();
                    match fallback_status {
                        Ok(s) if s.success() => {
                            messages::success(format!(
                                "Configuration file edited successfully using '{}'",
                                default_editor
                            ));
                        }
                        _ => {
                            messages::error("Could not open any editor for the configuration file");
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
