//! Combined router for the dinner decider endpoints

use axum::Router;
use std::path::Path;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use dinner_decider::AppContext;

use super::static_files::static_service;

/// Create the application router with HTTP request tracing.
///
/// Mounts `/login`, `/callback`, `/logout` and `/maps`, and falls back to the
/// files under `static_dir` for every other path.
pub fn dinner_router(ctx: AppContext, static_dir: impl AsRef<Path>) -> Router {
    dinner_router_no_trace(ctx, static_dir).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as [`dinner_router`] without the tracing middleware.
pub fn dinner_router_no_trace(ctx: AppContext, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(super::oauth2::router())
        .merge(super::maps::router())
        .fallback_service(static_service(static_dir))
        .with_state(ctx)
}
