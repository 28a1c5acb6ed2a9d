use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Failures a request can end in. The store itself never fails.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    #[error("Key and value must be provided")]
    MissingKeyValue,

    #[error("Key must be provided")]
    MissingKey,

    /// Carries the key for logging; the response body does not echo it.
    #[error("Key not found")]
    KeyNotFound(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingKeyValue | ApiError::MissingKey => StatusCode::BAD_REQUEST,
            ApiError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}
