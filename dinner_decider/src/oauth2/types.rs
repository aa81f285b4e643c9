use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters Google sends back to the redirect URL.
///
/// Both fields default to empty so that a missing `state` is reported as a
/// state mismatch rather than a query rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub code: String,
}

/// A login in progress, keyed by its state token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct StoredState {
    pub(crate) pkce_verifier: String,
    pub(crate) expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
}
