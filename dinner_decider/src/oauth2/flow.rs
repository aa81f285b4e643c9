use chrono::{Duration, Utc};
use http::header::HeaderMap;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::storage::{CacheData, SharedCacheStore};
use crate::utils::{base64url_encode, gen_random_string, get_cookie_value, header_set_cookie};

use super::config::OAuth2Config;
use super::errors::OAuth2Error;
use super::types::{AuthResponse, StoredState};

pub(super) const STATE_PREFIX: &str = "oauth2_state";

/// Starts a login: stores a fresh state and PKCE verifier, and returns the
/// provider URL to redirect to along with the Set-Cookie header binding the
/// state to this browser.
pub(crate) async fn prepare_oauth2_auth_request(
    config: &OAuth2Config,
    store: &SharedCacheStore,
) -> Result<(String, HeaderMap), OAuth2Error> {
    let ttl = config.state_max_age;
    let expires_at = Utc::now() + Duration::seconds(ttl as i64);

    let state = gen_random_string(32)?;
    let pkce_verifier = gen_random_string(32)?;
    let pkce_challenge = base64url_encode(Sha256::digest(pkce_verifier.as_bytes()).to_vec());

    let stored_state = StoredState {
        pkce_verifier,
        expires_at,
    };
    store
        .lock()
        .await
        .put_with_ttl(
            STATE_PREFIX,
            &state,
            CacheData::from_value(&stored_state)?,
            ttl,
        )
        .await?;

    let auth_url = build_auth_url(config, &state, &pkce_challenge);
    tracing::debug!("Auth URL: {}", auth_url);

    let mut headers = HeaderMap::new();
    header_set_cookie(&mut headers, &config.state_cookie_name, &state, ttl as i64)?;

    Ok((auth_url, headers))
}

pub(super) fn build_auth_url(config: &OAuth2Config, state: &str, pkce_challenge: &str) -> String {
    let mut url = config.auth_url.clone();
    url.query_pairs_mut()
        .append_pair("client_id", &config.client_id)
        .append_pair("redirect_uri", config.redirect_url.as_str())
        .append_pair("response_type", "code")
        .append_pair("scope", &config.scopes.join(" "))
        .append_pair("state", state)
        .append_pair("access_type", "online")
        .append_pair("code_challenge", pkce_challenge)
        .append_pair("code_challenge_method", "S256");
    url.into()
}

/// Checks the `state` query parameter against the state cookie and the
/// pending login it names. A state can be redeemed once.
pub(crate) async fn validate_state(
    config: &OAuth2Config,
    store: &SharedCacheStore,
    headers: &HeaderMap,
    auth_response: &AuthResponse,
) -> Result<StoredState, OAuth2Error> {
    let Some(cookie_state) = get_cookie_value(headers, &config.state_cookie_name) else {
        tracing::error!("No state cookie found");
        return Err(OAuth2Error::StateMismatch);
    };

    let query_state = auth_response.state.as_bytes();
    if query_state.is_empty() || !bool::from(cookie_state.as_bytes().ct_eq(query_state)) {
        tracing::error!("State in query does not match state cookie");
        return Err(OAuth2Error::StateMismatch);
    }

    let Some(cached) = store
        .lock()
        .await
        .take(STATE_PREFIX, &auth_response.state)
        .await?
    else {
        tracing::error!("State not found or already used");
        return Err(OAuth2Error::StateMismatch);
    };

    let stored_state: StoredState = cached.to_value()?;
    if Utc::now() > stored_state.expires_at {
        tracing::error!("State expired at {}", stored_state.expires_at);
        return Err(OAuth2Error::StateMismatch);
    }

    Ok(stored_state)
}
