//! Per-call log destination.
//!
//! A `LogSink` owns the opened log file and a `tracing` dispatcher that writes
//! to it. Records emitted with `tracing::info!` / `tracing::error!` inside
//! `LogSink::scope` land in that file only, one line per record:
//!
//! ```text
//! INFO:connect:STARTED AT CWD: /home/me/project
//! ```

use crate::connector::ConnectOptions;
use crate::errors::ConnectError;
use chrono::{Local, SecondsFormat};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing::{Dispatch, Event, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

/// Event formatter producing `<LEVEL>:<logger>:<message>`.
#[derive(Debug, Clone)]
pub struct RecordFormat {
    logger: String,
    timestamps: bool,
}

impl RecordFormat {
    pub fn new(logger: impl Into<String>, timestamps: bool) -> Self {
        Self {
            logger: logger.into(),
            timestamps,
        }
    }
}

impl<S, N> FormatEvent<S, N> for RecordFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        if self.timestamps {
            write!(
                writer,
                "{} ",
                Local::now().to_rfc3339_opts(SecondsFormat::Millis, false)
            )?;
        }
        write!(writer, "{}:{}:", event.metadata().level(), self.logger)?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

pub struct LogSink {
    path: PathBuf,
    dispatch: Dispatch,
}

impl LogSink {
    /// Open (or create) `path` for appending and build the dispatcher for it.
    pub fn open(path: &Path, options: &ConnectOptions) -> Result<Self, ConnectError> {
        let file = open_append(path).map_err(|source| ConnectError::LogDestination {
            path: path.to_path_buf(),
            source,
        })?;

        let subscriber = tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_max_level(LevelFilter::INFO)
            .event_format(RecordFormat::new(
                options.logger_name.clone(),
                options.timestamps,
            ))
            .finish();

        Ok(Self {
            path: path.to_path_buf(),
            dispatch: Dispatch::new(subscriber),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `f` with this sink as the current thread's default dispatcher.
    pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
