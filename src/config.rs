//! Configuration management for Mission Control.
//!
//! Configuration is read from environment variables:
//! - `CLAWDBOT_URL` - Optional. Base URL of the agent backend. Defaults to `http://localhost:18789`.
//! - `CLAWDBOT_TOKEN` - Optional. Bearer token for the agent backend. Defaults to empty.
//! - `MEMORY_DIR` - Optional. Directory holding memory markdown files. Defaults to `/home/clawdbot/clawd/memory`.
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `3000`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Connection details for the agent backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub token: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:18789".to_string(),
            token: String::new(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Agent backend connection
    pub backend: BackendConfig,

    /// Directory of memory markdown files
    pub memory_dir: PathBuf,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            memory_dir: PathBuf::from("/home/clawdbot/clawd/memory"),
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        // A variable that is set but empty counts as unset
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let backend = BackendConfig {
            base_url: lookup("CLAWDBOT_URL").unwrap_or(defaults.backend.base_url),
            token: lookup("CLAWDBOT_TOKEN").unwrap_or(defaults.backend.token),
        };

        let memory_dir = lookup("MEMORY_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.memory_dir);

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?,
            None => defaults.port,
        };

        Ok(Self {
            backend,
            memory_dir,
            host,
            port,
        })
    }

    /// Address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
