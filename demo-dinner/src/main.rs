use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dinner_decider_axum::{AppConfig, AppContext, ServerConfig, dinner_router};

mod server;

use crate::server::serve_http;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}=debug,dinner_decider=debug,dinner_decider_axum=debug,tower_http=info",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().inspect_err(|e| tracing::error!("{e}"))?;
    let ctx = AppContext::new(config)?;
    let server_config = ServerConfig::from_env();

    let app = dinner_router(ctx, &server_config.static_dir);

    serve_http(server_config.port, app).await?;
    Ok(())
}
