//! Listener settings for the dinner decider server

use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "./static";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on. Default: 8080
    pub port: u16,
    /// Directory served at `/`. Default: "./static"
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("STATIC_DIR").ok().as_deref(),
        )
    }

    fn from_values(port: Option<&str>, static_dir: Option<&str>) -> Self {
        Self {
            port: port.and_then(|p| p.parse().ok()).unwrap_or(DEFAULT_PORT),
            static_dir: PathBuf::from(static_dir.unwrap_or(DEFAULT_STATIC_DIR)),
        }
    }
}
