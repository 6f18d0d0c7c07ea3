//! Configuration management for arkchat.
//!
//! Loads configuration from ${ARKCHAT_HOME}/config.toml with sensible
//! defaults. The service base URL can additionally be overridden with the
//! `ARKCHAT_BASE_URL` environment variable, which takes precedence over the
//! file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the service base URL.
pub const BASE_URL_ENV: &str = "ARKCHAT_BASE_URL";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the ArkAgents service.
    pub base_url: String,

    /// Per-request timeout in seconds. A hung request must never leave the
    /// UI waiting forever, so zero is not accepted (falls back to default).
    pub request_timeout_secs: u64,
}

impl Config {
    const DEFAULT_BASE_URL: &str = "http://localhost:8001";
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Loads configuration from the default config path, applying the
    /// environment override.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&paths::config_path())?;
        config.apply_env_override();
        Ok(config)
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config: Config = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?
        } else {
            Config::default()
        };
        if config.request_timeout_secs == 0 {
            config.request_timeout_secs = Self::DEFAULT_REQUEST_TIMEOUT_SECS;
        }
        Ok(config)
    }

    fn apply_env_override(&mut self) {
        if let Ok(url) = std::env::var(BASE_URL_ENV)
            && !url.trim().is_empty()
        {
            self.base_url = url;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

pub mod paths {
    //! Path resolution for arkchat configuration and data directories.
    //!
    //! ARKCHAT_HOME resolution order:
    //! 1. ARKCHAT_HOME environment variable (if set)
    //! 2. ~/.config/arkchat (default)

    use std::path::PathBuf;

    /// Returns the arkchat home directory.
    pub fn arkchat_home() -> PathBuf {
        if let Ok(home) = std::env::var("ARKCHAT_HOME") {
            return PathBuf::from(home);
        }
        home_dir()
            .map(|h| h.join(".config").join("arkchat"))
            .unwrap_or_else(|| PathBuf::from(".arkchat"))
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        arkchat_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn log_dir() -> PathBuf {
        arkchat_home().join("logs")
    }

    /// Returns the user's home directory, if known.
    pub fn home_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults_when_file_missing() {
        let config = Config::load_from(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.base_url, "http://localhost:8001");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_loads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "base_url = \"http://chat.example:9000\"").unwrap();
        writeln!(file, "request_timeout_secs = 5").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url, "http://chat.example:9000");
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = \"http://other:1234\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url, "http://other:1234");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "request_timeout_secs = 0\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = [not toml").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
