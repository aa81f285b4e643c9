mod config;
mod errors;
mod flow;
mod token;
mod types;

pub use config::OAuth2Config;
pub use errors::OAuth2Error;
pub use types::{AuthResponse, TokenResponse};

pub(crate) use flow::{prepare_oauth2_auth_request, validate_state};
pub(crate) use token::exchange_code_for_token;
