use clap::{Parser, Subcommand};

/// Command-line interface definition for rSaveTracker
#[derive(Parser)]
#[command(
    name = "rsavetracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track how much you have saved since you stopped spending on something, net of treats",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Configure and start the tracker
    Start {
        /// What you are saving on (e.g. "Coffee")
        #[arg(long)]
        label: String,

        /// Start date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Start time (HH:MM), defaults to now
        #[arg(long)]
        time: Option<String>,

        /// Money saved per day
        #[arg(long, allow_hyphen_values = true)]
        rate: String,
    },

    /// Show elapsed time and money saved
    Status,

    /// Live display, refreshed every tick
    Watch {
        /// Stop after N ticks
        #[arg(long, hide = true)]
        ticks: Option<u64>,
    },

    /// Log a treat paid with the savings
    Treat {
        #[arg(long)]
        label: String,

        #[arg(long, allow_hyphen_values = true)]
        amount: String,
    },

    /// List logged treats, newest first
    Treats,

    /// Clear the tracker and all logged treats
    Reset {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
