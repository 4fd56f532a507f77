use std::sync::Arc;

use axum::{Json, Router, extract::Extension, http::StatusCode, routing::get};

use evently_core::DomainError;
use evently_infra::{PublicUser, ServiceError};

use crate::app::{errors::ApiError, services::AppServices};
use crate::context::PrincipalContext;
use crate::middleware::AuthState;

pub fn router(auth_state: &AuthState) -> Router {
    super::authenticated_only(Router::new().route("/me", get(me)), auth_state)
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// GET /api/me: the caller's own account, re-read from the store.
pub async fn me(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> Result<Json<PublicUser>, ApiError> {
    match services.users.get(principal.user_id()) {
        Ok(user) => Ok(Json(user)),
        // The token outlived the account.
        Err(ServiceError::Domain(DomainError::NotFound)) => Err(ApiError::NotFound("User not found")),
        Err(other) => Err(other.into()),
    }
}
