use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum GoogleApiError {
    #[error("Failed to get user info: {0}")]
    FetchUserInfo(String),

    #[error("Failed to retrieve files: {0}")]
    ListFiles(String),
}
