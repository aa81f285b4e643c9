use std::path::Path;
use tower_http::services::ServeDir;

/// Serves files under `dir`; `/` resolves to `index.html`.
pub(super) fn static_service(dir: impl AsRef<Path>) -> ServeDir {
    tracing::debug!("Serving static files from {}", dir.as_ref().display());
    ServeDir::new(dir)
}
