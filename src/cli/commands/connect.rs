use crate::cli::parser::Commands;
use crate::config::Config;
use crate::connector::{ConnectionRequest, Connector};
use crate::errors::AppResult;
use crate::ui::messages;
use std::path::PathBuf;

/// Handle the `connect` command
///
/// Opens the database through the connector, reports the outcome and closes
/// the connection again.
pub fn handle(cmd: &Commands, cfg: &Config, log_override: Option<&str>) -> AppResult<()> {
    if let Commands::Connect { db, read_only } = cmd {
        let log_path = match log_override {
            Some(p) => PathBuf::from(p),
            None => cfg.log_path(),
        };

        let mut options = cfg.connect_options();
        options.read_only |= *read_only;

        let request = ConnectionRequest::new(db, &log_path);
        let conn = Connector::new(options).connect(&request)?;

        messages::success(format!(
            "Connected to {} (SQLite {})",
            db,
            rusqlite::version()
        ));
        messages::info(format!("Log: {}", log_path.display()));

        conn.close().map_err(|(_, e)| e)?;
    }

    Ok(())
}
