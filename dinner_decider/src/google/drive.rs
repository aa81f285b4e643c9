use std::collections::HashSet;

use crate::utils::json_or_upstream_error;

use super::config::GoogleApiConfig;
use super::errors::GoogleApiError;
use super::types::{FileList, FileListPage};

/// Upper bound on Drive pages fetched for a single listing.
pub(crate) const MAX_PAGES: usize = 100;

/// Lists every Drive file of the configured maps MIME type, following
/// `nextPageToken` until the last page.
///
/// Fails when more than [`MAX_PAGES`] pages are offered or when Drive hands
/// back a page token it already returned.
pub(crate) async fn list_map_files(
    client: &reqwest::Client,
    config: &GoogleApiConfig,
    access_token: &str,
) -> Result<FileList, GoogleApiError> {
    let query = format!("mimeType='{}'", config.maps_mime_type);
    let mut files = Vec::new();
    let mut page_token: Option<String> = None;
    let mut seen_tokens = HashSet::new();

    for page_number in 1.. {
        if page_number > MAX_PAGES {
            tracing::error!("Drive listing exceeded {} pages", MAX_PAGES);
            return Err(GoogleApiError::ListFiles(format!(
                "listing exceeded {MAX_PAGES} pages"
            )));
        }

        let mut request = client
            .get(config.drive_files_url())
            .query(&[
                ("q", query.as_str()),
                ("fields", "nextPageToken, files(id, name)"),
            ])
            .bearer_auth(access_token);
        if let Some(token) = &page_token {
            request = request.query(&[("pageToken", token.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GoogleApiError::ListFiles(e.to_string()))?;
        let page: FileListPage = json_or_upstream_error(response)
            .await
            .map_err(GoogleApiError::ListFiles)?;

        tracing::debug!("Fetched page with {} files", page.files.len());
        files.extend(page.files);

        match page.next_page_token {
            Some(next) if !next.is_empty() => {
                if !seen_tokens.insert(next.clone()) {
                    tracing::error!("Drive returned page token {} twice", next);
                    return Err(GoogleApiError::ListFiles(format!(
                        "page token {next} was already returned"
                    )));
                }
                page_token = Some(next);
            }
            _ => break,
        }
    }

    Ok(FileList { files })
}
