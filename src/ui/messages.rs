//! Console output for the CLI: one coloured, prefixed line per message.
//! Log records never go through here; they belong to the connector's sink.

use std::fmt;

#[derive(Debug, Clone, Copy)]
enum Tone {
    Info,
    Success,
    Warning,
    Failure,
}

impl Tone {
    fn colour(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[34m",
            Tone::Success => "\x1b[32m",
            Tone::Warning => "\x1b[33m",
            Tone::Failure => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Failure => "❌",
        }
    }

    fn render(self, msg: &dyn fmt::Display) -> String {
        format!("{}\x1b[1m{}\x1b[0m {}", self.colour(), self.icon(), msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", Tone::Info.render(&msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", Tone::Success.render(&msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", Tone::Warning.render(&msg));
}

/// Errors go to stderr as `Error: <msg>`.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", Tone::Failure.render(&format_args!("Error: {msg}")));
}
