use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::get,
};

use dinner_decider::{AppContext, FileList, list_maps_core};

use super::error::IntoResponseError;

pub(super) fn router() -> Router<AppContext> {
    Router::new().route("/maps", get(list_maps))
}

async fn list_maps(
    State(ctx): State<AppContext>,
    headers: HeaderMap,
) -> Result<Json<FileList>, (StatusCode, String)> {
    let files = list_maps_core(&ctx, &headers).await.into_response_error()?;
    Ok(Json(files))
}
