//! Error types.
//! `ConnectError` is what the connector hands back to callers; `AppError`
//! wraps it together with the CLI/config failures of the binary.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure of a single `connect` call. Each variant carries the offending
/// path so callers can discriminate on kind and still report the location.
#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("cannot open log destination {}: {source}", path.display())]
    LogDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("database not found: {}", path.display())]
    DatabaseNotFound { path: PathBuf },

    #[error("cannot open database {}: {source}", path.display())]
    DatabaseOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
}

impl ConnectError {
    /// Stable kind name, used in log records instead of the full message.
    pub fn kind(&self) -> &'static str {
        match self {
            ConnectError::LogDestination { .. } => "LogDestinationError",
            ConnectError::DatabaseNotFound { .. } => "DatabaseNotFoundError",
            ConnectError::DatabaseOpen { .. } => "DatabaseOpenError",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ConnectError::LogDestination { path, .. }
            | ConnectError::DatabaseNotFound { path }
            | ConnectError::DatabaseOpen { path, .. } => path,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("{0}")]
    Connect(#[from] ConnectError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
