//! sqlconnect library root.
//! Exposes the connector, its per-call log sink, and the CLI dispatcher.

pub mod cli;
pub mod config;
pub mod connector;
pub mod errors;
pub mod logging;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

pub use connector::{ConnectOptions, ConnectionRequest, Connector, connect};
pub use errors::ConnectError;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Connect { .. } => {
            cli::commands::connect::handle(&cli.command, cfg, cli.log.as_deref())
        }
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = Config::load()?;
    dispatch(&cli, &cfg)
}
