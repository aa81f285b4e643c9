mod config;
mod errors;
mod store;
mod types;

pub use config::SessionConfig;
pub use errors::SessionError;

pub(crate) use store::{create_session, get_access_token_from_headers, prepare_logout_response};
