use thiserror::Error;

use crate::google::GoogleApiError;
use crate::oauth2::OAuth2Error;
use crate::session::SessionError;

/// Errors surfaced by the request-level operations. Messages pass through
/// unchanged so the client sees the underlying cause.
#[derive(Debug, Error, Clone)]
pub enum CoordinationError {
    #[error(transparent)]
    OAuth2(#[from] OAuth2Error),

    #[error(transparent)]
    GoogleApi(#[from] GoogleApiError),

    #[error(transparent)]
    Session(#[from] SessionError),
}
