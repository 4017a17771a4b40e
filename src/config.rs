//! Configuration management for the PlayMoodify client.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage the location
//! of the analysis service and the request policy used when talking to it.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command-line flags (applied by the caller, highest priority)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Application defaults

use std::{env, fmt, path::PathBuf, time::Duration};

/// Base URL of the analysis service when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

pub const API_URL_VAR: &str = "PLAYMOODIFY_API_URL";
pub const TIMEOUT_VAR: &str = "PLAYMOODIFY_TIMEOUT_SECS";

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    EnvFile(String),
    InvalidTimeout(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "cannot prepare data directory: {}", e),
            ConfigError::EnvFile(e) => write!(f, "cannot read .env file: {}", e),
            ConfigError::InvalidTimeout(v) => {
                write!(f, "invalid timeout '{}', expected a positive number of seconds", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

/// Returns the path of the `.env` file in the local data directory.
///
/// - Linux: `~/.local/share/playmoodify/.env`
/// - macOS: `~/Library/Application Support/playmoodify/.env`
/// - Windows: `%LOCALAPPDATA%/playmoodify/.env`
pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playmoodify/.env");
    path
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist. A missing `.env` file is
/// not an error since every setting has a default; a file that exists but cannot
/// be parsed is reported.
///
/// # Example
///
/// ```
/// use playmoodify::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), ConfigError> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| ConfigError::EnvFile(e.to_string()))?;
    Ok(())
}

/// Returns the base URL of the analysis service.
///
/// Reads `PLAYMOODIFY_API_URL` and falls back to [`DEFAULT_API_URL`]. A trailing
/// slash is removed so endpoint paths can be appended directly.
///
/// # Example
///
/// ```
/// let base = api_base_url(); // e.g., "http://127.0.0.1:8000"
/// ```
pub fn api_base_url() -> String {
    let url = env::var(API_URL_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    url.trim().trim_end_matches('/').to_string()
}

/// Returns the optional per-request timeout.
///
/// Reads `PLAYMOODIFY_TIMEOUT_SECS`. When unset the client waits for the service
/// indefinitely.
pub fn request_timeout() -> Result<Option<Duration>, ConfigError> {
    match env::var(TIMEOUT_VAR) {
        Ok(value) if !value.trim().is_empty() => parse_timeout(&value).map(Some),
        _ => Ok(None),
    }
}

/// Parses a timeout given in seconds, allowing fractions (e.g. `2.5`).
pub fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    let secs: f64 = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidTimeout(value.to_string()))?;

    if !secs.is_finite() || secs <= 0.0 {
        return Err(ConfigError::InvalidTimeout(value.to_string()));
    }

    Ok(Duration::from_secs_f64(secs))
}
