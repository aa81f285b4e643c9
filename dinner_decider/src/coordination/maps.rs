use http::header::HeaderMap;

use crate::context::AppContext;
use crate::google::{FileList, list_map_files};
use crate::session::get_access_token_from_headers;

use super::errors::CoordinationError;

/// Lists the caller's Drive map files using the access token behind their
/// session cookie.
pub async fn list_maps_core(
    ctx: &AppContext,
    request_headers: &HeaderMap,
) -> Result<FileList, CoordinationError> {
    let access_token =
        get_access_token_from_headers(&ctx.config.session, &ctx.store, request_headers).await?;

    let files = list_map_files(&ctx.client, &ctx.config.google, &access_token).await?;
    tracing::debug!("Listed {} map files", files.files.len());
    Ok(files)
}
