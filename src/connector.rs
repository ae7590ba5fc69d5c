//! Database connector.
//!
//! `connect` validates the database path, opens it, and records every stage
//! of the call to a log file given by the caller:
//!
//! ```text
//! INFO:connect:STARTED AT CWD: /srv/app
//! INFO:connect:log_path: /srv/app/app.log
//! INFO:connect:db_path: /srv/app/db.db
//! INFO:connect:Successfully connected with db.db
//! INFO:connect:FINISHED
//! ```
//!
//! The returned connection belongs to the caller, who closes it.

use crate::errors::ConnectError;
use crate::logging::LogSink;
use crate::utils::path::{cwd_display, resolve};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub const DEFAULT_LOGGER_NAME: &str = "connect";

/// Inputs of one `connect` call.
#[derive(Debug, Clone)]
pub struct ConnectionRequest {
    pub db_path: PathBuf,
    pub log_path: PathBuf,
}

impl ConnectionRequest {
    pub fn new(db_path: impl AsRef<Path>, log_path: impl AsRef<Path>) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
            log_path: log_path.as_ref().to_path_buf(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConnectOptions {
    /// Name written in the second field of every record.
    pub logger_name: String,
    /// Prefix records with an RFC 3339 timestamp.
    pub timestamps: bool,
    pub read_only: bool,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            logger_name: DEFAULT_LOGGER_NAME.to_string(),
            timestamps: false,
            read_only: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Connector {
    options: ConnectOptions,
}

/// Open `db_path` with default options, logging to `log_path`.
pub fn connect(
    db_path: impl AsRef<Path>,
    log_path: impl AsRef<Path>,
) -> Result<Connection, ConnectError> {
    Connector::default().connect(&ConnectionRequest::new(db_path, log_path))
}

impl Connector {
    pub fn new(options: ConnectOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConnectOptions {
        &self.options
    }

    pub fn connect(&self, request: &ConnectionRequest) -> Result<Connection, ConnectError> {
        // Nothing can be recorded if the log itself cannot be opened.
        let sink = LogSink::open(&resolve(&request.log_path), &self.options)?;

        sink.scope(|| {
            info!("STARTED AT CWD: {}", cwd_display());
            info!("log_path: {}", sink.path().display());

            let result = self.open_validated(&request.db_path);
            if let Err(e) = &result {
                error!("{}", failure_record(e));
            }

            info!("FINISHED");
            result
        })
    }

    fn open_validated(&self, db_path: &Path) -> Result<Connection, ConnectError> {
        let db_path = resolve(db_path);
        // A stat failure (e.g. EACCES) is not "not found": the open reports it.
        if let Ok(false) = db_path.try_exists() {
            return Err(ConnectError::DatabaseNotFound { path: db_path });
        }
        info!("db_path: {}", db_path.display());

        let conn = self
            .open(&db_path)
            .map_err(|source| ConnectError::DatabaseOpen {
                path: db_path.clone(),
                source,
            })?;

        info!("Successfully connected with {}", display_name(&db_path));
        Ok(conn)
    }

    fn open(&self, db_path: &Path) -> rusqlite::Result<Connection> {
        // No SQLITE_OPEN_CREATE: the file was validated and must not be recreated.
        let access = if self.options.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE
        };
        let conn = Connection::open_with_flags(
            db_path,
            access | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        // SQLite opens lazily; reading the header surfaces corrupt files here.
        conn.query_row("PRAGMA schema_version", [], |row| row.get::<_, i64>(0))?;
        Ok(conn)
    }
}

/// Error record text: kind name plus driver message, never the path.
fn failure_record(err: &ConnectError) -> String {
    match err {
        ConnectError::DatabaseOpen { source, .. } => format!("{}: {}", err.kind(), source),
        _ => err.kind().to_string(),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
