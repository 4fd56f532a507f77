use std::sync::Arc;

use axum::{Json, Router, extract::Extension, routing::post};
use chrono::Utc;

use evently_infra::Session;

use crate::app::{dto, errors::ApiError, extract::JsonBody, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

/// POST /api/auth/signup
pub async fn signup(
    Extension(services): Extension<Arc<AppServices>>,
    JsonBody(body): JsonBody<dto::NewUserRequest>,
) -> Result<Json<Session>, ApiError> {
    let new = body.validate()?;
    let session = services.credentials.signup(new, Utc::now())?;
    Ok(Json(session))
}

/// POST /api/auth/login
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    JsonBody(body): JsonBody<dto::LoginRequest>,
) -> Result<Json<Session>, ApiError> {
    let session = services.credentials.login(
        body.email.as_deref(),
        body.password.as_deref(),
        Utc::now(),
    )?;
    Ok(Json(session))
}
