use crate::config::{ConfigError, ConfigSource};

const DEFAULT_PEOPLE_API_URL: &str = "https://people.googleapis.com/v1";
const DEFAULT_DRIVE_API_URL: &str = "https://www.googleapis.com/drive/v3";
const DEFAULT_MAPS_MIME_TYPE: &str = "application/vnd.google-apps.map";

#[derive(Debug, Clone)]
pub struct GoogleApiConfig {
    /// People API base, without trailing slash.
    pub people_api_url: String,
    /// Drive API base, without trailing slash.
    pub drive_api_url: String,
    /// MIME type of the Drive files listed on `/maps`.
    pub maps_mime_type: String,
}

impl GoogleApiConfig {
    pub(crate) fn from_source(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        let people_api_url = source.url_or("PEOPLE_API_URL", DEFAULT_PEOPLE_API_URL)?;
        let drive_api_url = source.url_or("DRIVE_API_URL", DEFAULT_DRIVE_API_URL)?;

        Ok(Self {
            people_api_url: people_api_url.as_str().trim_end_matches('/').to_string(),
            drive_api_url: drive_api_url.as_str().trim_end_matches('/').to_string(),
            maps_mime_type: source.var_or("MAPS_MIME_TYPE", DEFAULT_MAPS_MIME_TYPE),
        })
    }

    pub(crate) fn people_me_url(&self) -> String {
        format!("{}/people/me", self.people_api_url)
    }

    pub(crate) fn drive_files_url(&self) -> String {
        format!("{}/files", self.drive_api_url)
    }
}
