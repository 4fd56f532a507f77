use axum::{Router, middleware};

use crate::middleware::{AuthState, authenticate, require_admin};

pub mod auth;
pub mod events;
pub mod system;
pub mod users;

/// Router for everything under `/api`.
///
/// Each resource module decides which of its routes are public, which sit
/// behind `authenticate`, and which also sit behind `require_admin`.
pub fn router(auth_state: &AuthState) -> Router {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/events", events::router(auth_state))
        .nest("/users", users::router(auth_state))
        .merge(system::router(auth_state))
}

/// Layer both gates: authenticate runs first, then the admin check.
fn admin_only(router: Router, auth_state: &AuthState) -> Router {
    router
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(auth_state.clone(), authenticate))
}

fn authenticated_only(router: Router, auth_state: &AuthState) -> Router {
    router.route_layer(middleware::from_fn_with_state(auth_state.clone(), authenticate))
}
