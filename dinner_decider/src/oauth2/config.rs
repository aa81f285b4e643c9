use url::Url;

use crate::config::{ConfigError, ConfigSource, parse_url};

pub(crate) const DEFAULT_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/auth";
pub(crate) const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

// Drive metadata is the resource being listed; email and profile back the
// People API lookup done on callback.
pub(crate) const DEFAULT_SCOPE: &str =
    "openid email profile https://www.googleapis.com/auth/drive.metadata.readonly";

// "__Host-" prefix makes the cookie host-only.
const DEFAULT_STATE_COOKIE_NAME: &str = "__Host-OAuth2State";
const DEFAULT_STATE_MAX_AGE: u64 = 300;

/// OAuth2 client settings for the Google identity provider.
#[derive(Debug, Clone)]
pub struct OAuth2Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: Url,
    pub scopes: Vec<String>,
    pub auth_url: Url,
    pub token_url: Url,
    pub state_cookie_name: String,
    /// Lifetime of a pending authorization state, in seconds.
    pub state_max_age: u64,
}

impl OAuth2Config {
    pub(crate) fn from_source(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        let redirect_url = parse_url(
            "GOOGLE_REDIRECT_URL",
            &source.required("GOOGLE_REDIRECT_URL")?,
        )?;

        Ok(Self {
            client_id: source.required("GOOGLE_CLIENT_ID")?,
            client_secret: source.required("GOOGLE_CLIENT_SECRET")?,
            redirect_url,
            scopes: source
                .var_or("OAUTH2_SCOPE", DEFAULT_SCOPE)
                .split([' ', '+'])
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            auth_url: source.url_or("OAUTH2_AUTH_URL", DEFAULT_AUTH_URL)?,
            token_url: source.url_or("OAUTH2_TOKEN_URL", DEFAULT_TOKEN_URL)?,
            state_cookie_name: source.var_or("OAUTH2_STATE_COOKIE_NAME", DEFAULT_STATE_COOKIE_NAME),
            state_max_age: source.ttl_or("OAUTH2_STATE_MAX_AGE", DEFAULT_STATE_MAX_AGE)?,
        })
    }
}
