use chrono::{Duration, Utc};
use http::header::HeaderMap;

use crate::storage::{CacheData, SharedCacheStore};
use crate::utils::{gen_random_string, get_cookie_value, header_clear_cookie, header_set_cookie};

use super::config::SessionConfig;
use super::errors::SessionError;
use super::types::StoredSession;

const SESSION_PREFIX: &str = "session";

/// Stores `access_token` under a new random session id and returns the
/// Set-Cookie header carrying that id.
pub(crate) async fn create_session(
    config: &SessionConfig,
    store: &SharedCacheStore,
    access_token: &str,
    expires_in: Option<u64>,
) -> Result<HeaderMap, SessionError> {
    let ttl = expires_in.map_or(config.max_age, |e| e.min(config.max_age));
    let session_id = gen_random_string(32)?;

    let stored_session = StoredSession {
        access_token: access_token.to_string(),
        expires_at: Utc::now() + Duration::seconds(ttl as i64),
    };

    store
        .lock()
        .await
        .put_with_ttl(
            SESSION_PREFIX,
            &session_id,
            CacheData::from_value(&stored_session)?,
            ttl,
        )
        .await?;

    let mut headers = HeaderMap::new();
    header_set_cookie(&mut headers, &config.cookie_name, &session_id, ttl as i64)?;

    tracing::debug!("Created session, ttl: {}s", ttl);
    Ok(headers)
}

/// Resolves the session cookie in `headers` to the access token it stands for.
pub(crate) async fn get_access_token_from_headers(
    config: &SessionConfig,
    store: &SharedCacheStore,
    headers: &HeaderMap,
) -> Result<String, SessionError> {
    let Some(session_id) = get_cookie_value(headers, &config.cookie_name) else {
        tracing::debug!("No session cookie '{}' found", config.cookie_name);
        return Err(SessionError::Unauthorized);
    };

    let Some(cached) = store.lock().await.get(SESSION_PREFIX, &session_id).await? else {
        tracing::debug!("Session not found or expired");
        return Err(SessionError::Unauthorized);
    };

    let stored_session: StoredSession = cached.to_value()?;
    if stored_session.expires_at < Utc::now() {
        tracing::debug!("Session expired at {}", stored_session.expires_at);
        return Err(SessionError::Unauthorized);
    }

    Ok(stored_session.access_token)
}

/// Deletes the session named by the cookie, if any, and returns headers that
/// clear the cookie.
pub(crate) async fn prepare_logout_response(
    config: &SessionConfig,
    store: &SharedCacheStore,
    headers: &HeaderMap,
) -> Result<HeaderMap, SessionError> {
    if let Some(session_id) = get_cookie_value(headers, &config.cookie_name) {
        store
            .lock()
            .await
            .remove(SESSION_PREFIX, &session_id)
            .await?;
    }

    let mut headers = HeaderMap::new();
    header_clear_cookie(&mut headers, &config.cookie_name)?;
    Ok(headers)
}
