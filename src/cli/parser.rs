use clap::{Parser, Subcommand};

/// Command-line interface definition for rDriverlog
/// CLI application to register driver trips behind an admin key
#[derive(Parser)]
#[command(
    name = "rdriverlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Register driver trips (name, destination, date, time) and list them by date",
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

    /// Show the effective configuration
    Config {
        /// Print the configuration (file values merged with defaults)
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Print the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log in as administrator
    Login {
        /// Administrator key
        key: String,
    },

    /// Log out (always succeeds)
    Logout,

    /// Show the session state and the number of stored records
    Status,

    /// Register a new driver trip
    Add {
        /// Driver name
        #[arg(long, default_value = "")]
        name: String,

        /// Destination
        #[arg(long = "dest", default_value = "")]
        destination: String,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Time of day (HH:MM, 24h)
        #[arg(long, default_value = "")]
        time: String,
    },

    /// List driver trips, most recent date first
    List,

    /// Delete ALL driver trips (asks for confirmation)
    Del {
        /// Confirm without prompting
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Interactive session: one action per line (type `help`)
    Shell,
}
