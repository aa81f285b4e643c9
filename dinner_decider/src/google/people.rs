use crate::utils::json_or_upstream_error;

use super::config::GoogleApiConfig;
use super::errors::GoogleApiError;
use super::types::PersonProfile;

pub(crate) async fn fetch_profile(
    client: &reqwest::Client,
    config: &GoogleApiConfig,
    access_token: &str,
) -> Result<PersonProfile, GoogleApiError> {
    let response = client
        .get(config.people_me_url())
        .query(&[("personFields", "emailAddresses,names")])
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| GoogleApiError::FetchUserInfo(e.to_string()))?;

    let profile: PersonProfile = json_or_upstream_error(response)
        .await
        .map_err(GoogleApiError::FetchUserInfo)?;

    tracing::debug!(
        "Profile has {} names, {} email addresses",
        profile.names.len(),
        profile.email_addresses.len()
    );
    Ok(profile)
}
