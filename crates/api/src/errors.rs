use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use revop_domain::DomainError;

/// Maps a [`DomainError`] onto an HTTP status with the error text as a
/// plain-text body.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::UpstreamFailure(_) => StatusCode::SERVICE_UNAVAILABLE,
            DomainError::SerializationFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            err if err.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.0.to_string()).into_response()
    }
}
