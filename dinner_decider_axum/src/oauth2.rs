use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::Redirect,
    routing::get,
};

use dinner_decider::{
    AppContext, AuthResponse, clear_state_cookie_core, handle_callback_core, logout_core,
    start_login_core,
};

use super::error::IntoResponseError;

pub(super) fn router() -> Router<AppContext> {
    Router::new()
        .route("/login", get(login))
        .route("/callback", get(callback))
        .route("/logout", get(logout))
}

async fn login(
    State(ctx): State<AppContext>,
) -> Result<(HeaderMap, Redirect), (StatusCode, String)> {
    let (auth_url, headers) = start_login_core(&ctx).await.into_response_error()?;
    Ok((headers, Redirect::temporary(&auth_url)))
}

/// Failed callbacks still expire the state cookie.
async fn callback(
    State(ctx): State<AppContext>,
    Query(query): Query<AuthResponse>,
    headers: HeaderMap,
) -> Result<(HeaderMap, String), (StatusCode, HeaderMap, String)> {
    handle_callback_core(&ctx, &query, &headers)
        .await
        .into_response_error()
        .map_err(|(status, message)| {
            let cleared = clear_state_cookie_core(&ctx).unwrap_or_else(|e| {
                tracing::error!("Failed to clear state cookie: {}", e);
                HeaderMap::new()
            });
            (status, cleared, message)
        })
}

async fn logout(
    State(ctx): State<AppContext>,
    headers: HeaderMap,
) -> Result<(HeaderMap, Redirect), (StatusCode, String)> {
    let headers = logout_core(&ctx, &headers).await.into_response_error()?;
    Ok((headers, Redirect::temporary("/")))
}
