//! dinner_decider_axum - HTTP surface of the dinner decider
//!
//! Routes:
//! - `GET /login`: redirect to Google's consent screen
//! - `GET /callback`: finish the login and greet the user
//! - `GET /maps`: list the signed-in user's Drive maps as JSON
//! - `GET /logout`: drop the session
//! - anything else: static files

mod config;
mod error;
mod maps;
mod oauth2;
mod router;
mod static_files;

pub use config::ServerConfig;
pub use error::IntoResponseError;
pub use router::{dinner_router, dinner_router_no_trace};

pub use dinner_decider::{AppConfig, AppContext, ConfigError, FileList};
