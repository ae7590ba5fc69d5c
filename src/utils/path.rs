//! Path utilities: expand ~, make paths absolute against the working directory.

use std::env;
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Absolute form of `path`, relative paths joined onto the current directory.
/// Symlinks are not resolved and the path does not need to exist.
pub fn resolve(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Current working directory for display, or a placeholder when unavailable.
pub fn cwd_display() -> String {
    env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "<unknown>".to_string())
}
