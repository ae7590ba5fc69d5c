use clap::{Parser, Subcommand};

/// Command-line interface definition for sqlconnect
#[derive(Parser)]
#[command(
    name = "sqlconnect",
    version = env!("CARGO_PKG_VERSION"),
    about = "Open a SQLite database and record each step of the connection to a log file",
    long_about = None
)]
pub struct Cli {
    /// Override the log file path from the configuration
    #[arg(global = true, long = "log")]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open a database file (it must already exist) and report the result
    Connect {
        /// Path of the SQLite database file
        db: String,

        /// Open the database read-only
        #[arg(long = "read-only")]
        read_only: bool,
    },

    /// Print or create the configuration file
    Config {
        /// Print the current configuration
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Write the default configuration file if none exists
        #[arg(long = "init", help = "Create the default configuration file")]
        init: bool,
    },
}
