use thiserror::Error;

use crate::storage::StorageError;
use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum OAuth2Error {
    /// The `state` returned by the provider does not match a pending login.
    #[error("State mismatch")]
    StateMismatch,

    #[error("Failed to exchange token: {0}")]
    TokenExchange(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serde error: {0}")]
    Serde(String),

    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}

impl From<StorageError> for OAuth2Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Serde(e) => Self::Serde(e),
            StorageError::Storage(e) => Self::Storage(e),
        }
    }
}
