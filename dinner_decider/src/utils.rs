use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use headers::{Cookie, HeaderMapExt};
use http::header::{HeaderMap, SET_COOKIE};
use ring::rand::SecureRandom;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

pub(crate) fn base64url_encode(input: Vec<u8>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Generates `len` random bytes and returns them base64url encoded.
pub(crate) fn gen_random_string(len: usize) -> Result<String, UtilError> {
    let rng = ring::rand::SystemRandom::new();
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes)
        .map_err(|_| UtilError::Crypto("Failed to generate random string".to_string()))?;
    Ok(base64url_encode(bytes))
}

pub(crate) fn header_set_cookie<'a>(
    headers: &'a mut HeaderMap,
    name: &str,
    value: &str,
    max_age: i64,
) -> Result<&'a HeaderMap, UtilError> {
    let cookie =
        format!("{name}={value}; SameSite=Lax; Secure; HttpOnly; Path=/; Max-Age={max_age}");
    tracing::debug!("Set-Cookie: {}", name);
    headers.append(
        SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| UtilError::Cookie("Failed to parse cookie".to_string()))?,
    );
    Ok(headers)
}

/// Appends a Set-Cookie header that expires `name` immediately.
pub(crate) fn header_clear_cookie<'a>(
    headers: &'a mut HeaderMap,
    name: &str,
) -> Result<&'a HeaderMap, UtilError> {
    header_set_cookie(headers, name, "value", -86400)
}

pub(crate) fn get_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookies = headers.typed_get::<Cookie>()?;
    cookies.get(name).map(str::to_string)
}

/// Creates the HTTP client used for every upstream call:
///
/// - `timeout`: 30 seconds, so a hung provider cannot hold a request forever.
/// - `pool_idle_timeout`: 90 seconds.
/// - `pool_max_idle_per_host`: 32.
pub fn get_client() -> Result<reqwest::Client, UtilError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(32)
        .build()
        .map_err(|e| UtilError::HttpClient(e.to_string()))
}

/// Decodes a JSON body from a successful response. Non-2xx responses and
/// transport or decoding failures come back as the upstream error text.
pub(crate) async fn json_or_upstream_error<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, String> {
    let status = response.status();
    let body = response.text().await.map_err(|e| e.to_string())?;

    if !status.is_success() {
        tracing::debug!("Upstream error {}: {}", status, body);
        return Err(format!("{status}: {body}"));
    }

    serde_json::from_str(&body).map_err(|e| format!("Failed to deserialize response body: {e}"))
}

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Cookie error: {0}")]
    Cookie(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}
