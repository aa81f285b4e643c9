use crate::utils::json_or_upstream_error;

use super::config::OAuth2Config;
use super::errors::OAuth2Error;
use super::types::TokenResponse;

/// Redeems an authorization code at the token endpoint.
pub(crate) async fn exchange_code_for_token(
    client: &reqwest::Client,
    config: &OAuth2Config,
    code: &str,
    code_verifier: &str,
) -> Result<TokenResponse, OAuth2Error> {
    let response = client
        .post(config.token_url.clone())
        .form(&[
            ("code", code),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("redirect_uri", config.redirect_url.as_str()),
            ("grant_type", "authorization_code"),
            ("code_verifier", code_verifier),
        ])
        .send()
        .await
        .map_err(|e| OAuth2Error::TokenExchange(e.to_string()))?;

    let token: TokenResponse = json_or_upstream_error(response)
        .await
        .map_err(OAuth2Error::TokenExchange)?;

    tracing::debug!(
        "Token exchange succeeded, token_type: {:?}, expires_in: {:?}",
        token.token_type,
        token.expires_in
    );
    Ok(token)
}
