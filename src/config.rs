//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_ROOT: &str = "target/site";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },
    #[error("server failed: {0}")]
    Serve(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the built site; compiled assets live under `pkg/`.
    pub site_root: PathBuf,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: default `target/site`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            site_root: parse_site_root(std::env::var("SITE_ROOT").ok().as_deref()),
        })
    }

    #[must_use]
    pub fn pkg_dir(&self) -> PathBuf {
        self.site_root.join("pkg")
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_site_root(raw: Option<&str>) -> PathBuf {
    match raw.map(str::trim) {
        None | Some("") => PathBuf::from(DEFAULT_SITE_ROOT),
        Some(value) => PathBuf::from(value),
    }
}
