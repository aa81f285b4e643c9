//! Central configuration for the dinner_decider crate
//!
//! Everything is read once at startup into an [`AppConfig`] value, which is
//! then handed to request handlers through the application context.

use std::env;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

use crate::google::GoogleApiConfig;
use crate::oauth2::OAuth2Config;
use crate::session::SessionConfig;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(String),

    #[error("Invalid URL in {name}: {reason}")]
    InvalidUrl { name: String, reason: String },

    #[error("{name} must be at most {max} seconds, got {value}")]
    TtlOutOfRange { name: String, value: u64, max: u64 },
}

/// Longest lifetime accepted for states and sessions: one year.
pub(crate) const MAX_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Source of configuration values, keyed by environment variable name.
pub(crate) trait ConfigSource {
    fn var(&self, key: &str) -> Option<String>;

    fn var_or(&self, key: &str, default: &str) -> String {
        self.var(key).unwrap_or(default.to_string())
    }

    fn required(&self, key: &str) -> Result<String, ConfigError> {
        self.var(key)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::Missing(key.to_string()))
    }

    /// Unparsable values fall back to the default.
    fn parsed_or<T: FromStr>(&self, key: &str, default: T) -> T {
        self.var(key).and_then(|s| s.parse().ok()).unwrap_or(default)
    }

    /// A lifetime in seconds. Unparsable values fall back to the default;
    /// values above [`MAX_TTL_SECS`] are rejected.
    fn ttl_or(&self, key: &str, default: u64) -> Result<u64, ConfigError> {
        let value = self.parsed_or(key, default);
        if value > MAX_TTL_SECS {
            return Err(ConfigError::TtlOutOfRange {
                name: key.to_string(),
                value,
                max: MAX_TTL_SECS,
            });
        }
        Ok(value)
    }

    fn url_or(&self, key: &str, default: &str) -> Result<Url, ConfigError> {
        parse_url(key, &self.var_or(key, default))
    }
}

pub(crate) fn parse_url(name: &str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

impl<F> ConfigSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, key: &str) -> Option<String> {
        self(key)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub oauth2: OAuth2Config,
    pub google: GoogleApiConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&|key: &str| env::var(key).ok())
    }

    /// Reads the configuration through a lookup function instead of the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_source(&lookup)
    }

    fn from_source(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        let config = Self {
            oauth2: OAuth2Config::from_source(source)?,
            google: GoogleApiConfig::from_source(source)?,
            session: SessionConfig::from_source(source)?,
        };
        tracing::debug!(
            "Loaded configuration: client_id={}, redirect_url={}",
            config.oauth2.client_id,
            config.oauth2.redirect_url
        );
        Ok(config)
    }
}
