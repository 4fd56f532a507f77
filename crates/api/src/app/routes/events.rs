use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    routing::{get, post, put},
};

use evently_core::EventId;
use evently_infra::{Event, EventPatch};

use crate::app::{dto, errors::ApiError, extract::JsonBody, services::AppServices};
use crate::middleware::AuthState;

pub fn router(auth_state: &AuthState) -> Router {
    let public = Router::new()
        .route("/", get(list_events))
        .route("/:id", get(get_event));

    let admin = Router::new()
        .route("/", post(create_event))
        .route("/:id", put(update_event).delete(delete_event));

    public.merge(super::admin_only(admin, auth_state))
}

/// GET /api/events (newest first)
pub async fn list_events(Extension(services): Extension<Arc<AppServices>>) -> Json<Vec<Event>> {
    Json(services.events.list())
}

/// GET /api/events/:id
pub async fn get_event(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<Event>, ApiError> {
    Ok(Json(services.events.get(&EventId::from(id))?))
}

/// POST /api/events (admin)
pub async fn create_event(
    Extension(services): Extension<Arc<AppServices>>,
    JsonBody(body): JsonBody<dto::NewEventRequest>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let event = services.events.create(body.validate()?)?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/events/:id (admin, partial patch)
pub async fn update_event(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<EventPatch>,
) -> Result<Json<Event>, ApiError> {
    Ok(Json(services.events.update(&EventId::from(id), patch)?))
}

/// DELETE /api/events/:id (admin)
pub async fn delete_event(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<Event>, ApiError> {
    Ok(Json(services.events.delete(&EventId::from(id))?))
}
