//! Host configuration from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
    #[error("BIND_ADDR must not be empty")]
    EmptyBindAddr,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read `PORT` and `BIND_ADDR` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unparsable port or blank bind address.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unparsable port or blank bind address.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyBindAddr),
            Some(raw) => raw.trim().to_owned(),
            None => DEFAULT_BIND_ADDR.to_owned(),
        };
        Ok(Self { bind_addr, port })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}
