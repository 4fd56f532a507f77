//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store + token authority wiring shared by every handler
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request DTOs
//! - `extract.rs`: JSON body extractor (empty body reads as `{}`)
//! - `errors.rs`: consistent `{message}` error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use evently_auth::{Hs256TokenAuthority, TokenAuthority};
use evently_infra::{Config, DocumentStore, JsonFileStore, Store};

use crate::middleware::AuthState;

pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;
pub mod services;

/// Build the full HTTP router backed by the configured JSON data file
/// (public entrypoint used by `main.rs`).
pub fn build_app(config: &Config) -> Router {
    build_app_with_store(&config.jwt_secret, JsonFileStore::new(&config.data_file))
}

/// Build the full HTTP router over an arbitrary store backend.
pub fn build_app_with_store(jwt_secret: &str, store: impl Store + 'static) -> Router {
    let tokens: Arc<dyn TokenAuthority> = Arc::new(Hs256TokenAuthority::new(jwt_secret));
    let auth = AuthState {
        tokens: tokens.clone(),
    };
    let services = Arc::new(services::AppServices::new(DocumentStore::new(store), tokens));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router(&auth))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(Extension(services)),
        )
}
