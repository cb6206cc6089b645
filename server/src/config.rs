//! Server configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Parsing goes through a lookup closure so tests can supply variables
//! without touching process env. `from_env` is the only caller of
//! `std::env` here.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {var}")]
    Missing { var: &'static str },

    #[error("invalid {var}={value:?}: {reason}")]
    Invalid { var: &'static str, value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_addr: IpAddr,
    /// Backend REST base, without trailing `/`. `/api/{path}` is forwarded
    /// to `{api_upstream_url}/{path}`.
    pub api_upstream_url: String,
    pub api_timeout: Duration,
}

impl ServerConfig {
    /// Build config from process environment.
    ///
    /// Required:
    /// - `API_UPSTREAM_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `API_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let bind_addr = parse_or("BIND_ADDR", lookup("BIND_ADDR"), DEFAULT_BIND_ADDR)?;
        let timeout_secs = parse_or("API_TIMEOUT_SECS", lookup("API_TIMEOUT_SECS"), DEFAULT_API_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "API_TIMEOUT_SECS",
                value: timeout_secs.to_string(),
                reason: "must be greater than zero".into(),
            });
        }

        let raw_upstream = lookup("API_UPSTREAM_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing { var: "API_UPSTREAM_URL" })?;
        let api_upstream_url = raw_upstream.trim().trim_end_matches('/').to_string();
        if !(api_upstream_url.starts_with("http://") || api_upstream_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                var: "API_UPSTREAM_URL",
                value: raw_upstream,
                reason: "expected an http:// or https:// URL".into(),
            });
        }

        Ok(Self { port, bind_addr, api_upstream_url, api_timeout: Duration::from_secs(timeout_secs) })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|e: T::Err| ConfigError::Invalid { var, value: value.to_string(), reason: e.to_string() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
