use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    routing::{get, put},
};

use evently_core::UserId;
use evently_infra::{PublicUser, UserPatch};

use crate::app::{dto, errors::ApiError, extract::JsonBody, services::AppServices};
use crate::middleware::AuthState;

/// Every user route is admin-only.
pub fn router(auth_state: &AuthState) -> Router {
    let admin = Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", put(update_user).delete(delete_user));

    super::admin_only(admin, auth_state)
}

/// GET /api/users (admin)
pub async fn list_users(Extension(services): Extension<Arc<AppServices>>) -> Json<Vec<PublicUser>> {
    Json(services.users.list())
}

/// POST /api/users (admin)
pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    JsonBody(body): JsonBody<dto::NewUserRequest>,
) -> Result<(StatusCode, Json<PublicUser>), ApiError> {
    let user = services.users.create(body.validate()?)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/users/:id (admin, partial patch)
pub async fn update_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<UserPatch>,
) -> Result<Json<PublicUser>, ApiError> {
    Ok(Json(services.users.update(&UserId::from(id), patch)?))
}

/// DELETE /api/users/:id (admin)
pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<PublicUser>, ApiError> {
    Ok(Json(services.users.delete(&UserId::from(id))?))
}
