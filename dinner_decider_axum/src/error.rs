use http::StatusCode;

use dinner_decider::{CoordinationError, OAuth2Error, SessionError};

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Client mistakes map to 4xx; upstream and internal failures to 500 with
/// the underlying message in the body.
impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            let status = match e {
                CoordinationError::OAuth2(OAuth2Error::StateMismatch) => StatusCode::BAD_REQUEST,
                CoordinationError::Session(SessionError::Unauthorized) => StatusCode::UNAUTHORIZED,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            if status.is_server_error() {
                tracing::error!("{}", e);
            } else {
                tracing::debug!("Rejected request: {}", e);
            }
            (status, e.to_string())
        })
    }
}
