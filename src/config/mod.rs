use crate::connector::{ConnectOptions, DEFAULT_LOGGER_NAME};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_logger_name")]
    pub logger_name: String,
    #[serde(default)]
    pub timestamps: bool,
    #[serde(default)]
    pub read_only: bool,
}

fn default_log_file() -> String {
    Config::config_dir()
        .join("sqlconnect.log")
        .to_string_lossy()
        .to_string()
}
fn default_logger_name() -> String {
    DEFAULT_LOGGER_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            logger_name: default_logger_name(),
            timestamps: false,
            read_only: false,
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.sqlconnect`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".sqlconnect")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("sqlconnect.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        if cfg.logger_name.trim().is_empty() {
            return Err(AppError::Config("logger_name must not be empty".into()));
        }
        Ok(cfg)
    }

    /// Write the default configuration file. An existing file is left untouched.
    /// Returns whether a new file was written.
    pub fn init() -> AppResult<bool> {
        let path = Self::config_file();
        if path.exists() {
            return Ok(false);
        }
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(&Self::default())?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }

    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }

    pub fn connect_options(&self) -> ConnectOptions {
        ConnectOptions {
            logger_name: self.logger_name.clone(),
            timestamps: self.timestamps,
            read_only: self.read_only,
        }
    }
}
