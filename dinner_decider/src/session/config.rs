use crate::config::{ConfigError, ConfigSource};

const DEFAULT_SESSION_COOKIE_NAME: &str = "__Host-SessionId";
const DEFAULT_SESSION_COOKIE_MAX_AGE: u64 = 3600;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    /// Upper bound on a session's lifetime, in seconds. The access token's
    /// own `expires_in` shortens it further.
    pub max_age: u64,
}

impl SessionConfig {
    pub(crate) fn from_source(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        Ok(Self {
            cookie_name: source.var_or("SESSION_COOKIE_NAME", DEFAULT_SESSION_COOKIE_NAME),
            max_age: source.ttl_or("SESSION_COOKIE_MAX_AGE", DEFAULT_SESSION_COOKIE_MAX_AGE)?,
        })
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_SESSION_COOKIE_NAME.to_string(),
            max_age: DEFAULT_SESSION_COOKIE_MAX_AGE,
        }
    }
}
