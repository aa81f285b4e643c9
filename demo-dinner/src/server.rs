use axum::Router;
use std::net::SocketAddr;

pub(crate) async fn serve_http(port: u16, app: Router) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .inspect_err(|e| tracing::error!("Failed to bind {}: {}", addr, e))?;
    tracing::info!("HTTP server listening on {}", addr);
    axum::serve(listener, app).await
}
