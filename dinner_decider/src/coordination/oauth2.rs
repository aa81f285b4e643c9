use http::header::HeaderMap;

use crate::context::AppContext;
use crate::google::{PersonProfile, fetch_profile};
use crate::oauth2::{
    AuthResponse, OAuth2Error, exchange_code_for_token, prepare_oauth2_auth_request,
    validate_state,
};
use crate::session::{create_session, prepare_logout_response};
use crate::utils::header_clear_cookie;

use super::errors::CoordinationError;

const RECOMMENDATION_HEADER: &str = "Recommended restaurants for dinner:";

// Fixed placeholder list; there is no recommendation logic behind it.
const RECOMMENDED_RESTAURANTS: [&str; 3] = ["Restaurant A", "Restaurant B", "Restaurant C"];

/// Returns the provider authorization URL and the headers to send with the
/// redirect.
pub async fn start_login_core(ctx: &AppContext) -> Result<(String, HeaderMap), CoordinationError> {
    let (auth_url, headers) = prepare_oauth2_auth_request(&ctx.config.oauth2, &ctx.store).await?;
    Ok((auth_url, headers))
}

/// Completes a login: validates the state, redeems the code, fetches the
/// profile and opens a session.
///
/// Returns the response headers (session cookie set, state cookie cleared)
/// and the plain-text body.
pub async fn handle_callback_core(
    ctx: &AppContext,
    auth_response: &AuthResponse,
    request_headers: &HeaderMap,
) -> Result<(HeaderMap, String), CoordinationError> {
    let config = &ctx.config;

    let stored_state =
        validate_state(&config.oauth2, &ctx.store, request_headers, auth_response).await?;

    let token = exchange_code_for_token(
        &ctx.client,
        &config.oauth2,
        &auth_response.code,
        &stored_state.pkce_verifier,
    )
    .await?;

    let profile = fetch_profile(&ctx.client, &config.google, &token.access_token).await?;

    let mut headers =
        create_session(&config.session, &ctx.store, &token.access_token, token.expires_in).await?;
    header_clear_cookie(&mut headers, &config.oauth2.state_cookie_name)
        .map_err(OAuth2Error::from)?;

    tracing::info!("Login completed");
    Ok((headers, render_callback_body(&profile)))
}

/// Headers that expire the state cookie. Sent with every callback response,
/// successful or not, since a state is never valid twice.
pub fn clear_state_cookie_core(ctx: &AppContext) -> Result<HeaderMap, CoordinationError> {
    let mut headers = HeaderMap::new();
    header_clear_cookie(&mut headers, &ctx.config.oauth2.state_cookie_name)
        .map_err(OAuth2Error::from)?;
    Ok(headers)
}

/// Ends the caller's session, if any.
pub async fn logout_core(
    ctx: &AppContext,
    request_headers: &HeaderMap,
) -> Result<HeaderMap, CoordinationError> {
    let headers =
        prepare_logout_response(&ctx.config.session, &ctx.store, request_headers).await?;
    Ok(headers)
}

pub fn render_callback_body(profile: &PersonProfile) -> String {
    let mut lines = Vec::with_capacity(3 + RECOMMENDED_RESTAURANTS.len());

    lines.push(match profile.primary_email() {
        Some(email) => format!("User email: {email}"),
        None => "No email addresses found".to_string(),
    });
    lines.push(match profile.display_name() {
        Some(name) => format!("User name: {name}"),
        None => "No names found".to_string(),
    });
    lines.push(RECOMMENDATION_HEADER.to_string());
    lines.extend(RECOMMENDED_RESTAURANTS.iter().map(|r| format!("- {r}")));

    let mut body = lines.join("\n");
    body.push('\n');
    body
}
