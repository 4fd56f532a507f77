use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use evently_core::DomainError;
use evently_infra::ServiceError;

/// Every failure a route can surface, with the message the client sees.
///
/// The three 401 causes around bearer tokens never reveal *why* a token was
/// rejected; `InvalidOrExpiredToken` covers bad signatures, garbage, and expiry
/// alike.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing fields")]
    MissingFields,

    #[error("Invalid request body")]
    InvalidBody(#[source] JsonRejection),

    #[error("{0}")]
    Conflict(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing authorization header")]
    MissingCredentials,

    #[error("Invalid authorization format")]
    MalformedCredentials,

    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    #[error("Admin only")]
    Forbidden,

    #[error("{0}")]
    NotFound(&'static str),

    /// Store write or token signing failure. The cause is logged, not sent.
    #[error("Internal server error")]
    Internal(#[source] ServiceError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InvalidCredentials
            | ApiError::MissingCredentials
            | ApiError::MalformedCredentials
            | ApiError::InvalidOrExpiredToken => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(DomainError::MissingFields(_)) => ApiError::MissingFields,
            ServiceError::Domain(DomainError::Conflict(msg)) => ApiError::Conflict(msg),
            ServiceError::Domain(DomainError::NotFound) => ApiError::NotFound("Not found"),
            ServiceError::InvalidCredentials => ApiError::InvalidCredentials,
            other @ (ServiceError::Token(_) | ServiceError::Store(_)) => ApiError::Internal(other),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ServiceError::from(err).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(cause) => tracing::error!(error = %cause, "request failed"),
            ApiError::InvalidBody(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "rejected request body")
            }
            _ => {}
        }
        json_error(self.status(), self.to_string())
    }
}

/// `{"message": ...}` with the given status.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, axum::Json(json!({ "message": message.into() }))).into_response()
}
