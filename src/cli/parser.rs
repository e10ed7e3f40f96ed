use clap::{Parser, Subcommand};

/// Command-line interface definition for rBreakAlert
/// CLI daemon that watches input-device idle time and reminds you to take breaks
#[derive(Parser)]
#[command(
    name = "rbreakalert",
    version = env!("CARGO_PKG_VERSION"),
    about = "A break reminder CLI: watches input-device idle time and nudges you to step away",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (simulated idle probe, console notifications)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Validate the configuration (every duration field must parse)
        #[arg(long = "check", help = "Check configuration file for invalid duration fields")]
        check: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        /// Common choices: vim, nano.
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Watch idle activity and send break reminders (the poll loop)
    Watch {
        /// Run a single poll tick and exit (useful for tests and scripts)
        #[arg(long = "once", help = "Run a single poll tick and exit")]
        once: bool,

        /// Print a timestamped state line on every tick
        #[arg(long = "verbose", short = 'v')]
        verbose: bool,

        /// Poll interval, e.g. "500ms" or "2s" (overrides config)
        #[arg(long = "interval", value_name = "DURATION")]
        interval: Option<String>,

        /// Minimum idle time that counts as a completed break
        #[arg(long = "break-length", value_name = "DURATION")]
        break_length: Option<String>,

        /// Active time after which a reminder is due
        #[arg(long = "alert-after", value_name = "DURATION")]
        alert_after: Option<String>,

        /// Minimum spacing between two reminders
        #[arg(long = "notify-every", value_name = "DURATION")]
        notify_every: Option<String>,

        /// Idle time after which the user counts as idle
        #[arg(long = "idle-after", value_name = "DURATION")]
        idle_after: Option<String>,

        /// Notification title
        #[arg(long = "title")]
        title: Option<String>,

        /// Reminder body text
        #[arg(long = "body")]
        body: Option<String>,

        /// Sound name for reminders (from ~/Library/Sounds or the system set)
        #[arg(long = "sound")]
        sound: Option<String>,

        /// Sound name for break-completion alerts
        #[arg(long = "break-sound")]
        break_sound: Option<String>,
    },

    /// Sample the idle probe once and print the result
    Idle,
}
