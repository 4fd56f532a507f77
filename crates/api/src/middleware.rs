//! Access-control gates.
//!
//! `authenticate` verifies the bearer token and attaches a [`PrincipalContext`];
//! `require_admin` must always be layered *inside* it (closer to the handler),
//! so a role is only ever checked on a verified identity.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use evently_auth::TokenAuthority;

use crate::app::errors::ApiError;
use crate::context::PrincipalContext;

#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<dyn TokenAuthority>,
}

pub async fn authenticate(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer(req.headers())?;

    let claims = state.tokens.verify(token, Utc::now()).map_err(|e| {
        tracing::debug!(error = %e, "rejected bearer token");
        ApiError::InvalidOrExpiredToken
    })?;

    req.extensions_mut().insert(PrincipalContext::from(claims));

    Ok(next.run(req).await)
}

pub async fn require_admin(
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let is_admin = req
        .extensions()
        .get::<PrincipalContext>()
        .is_some_and(|principal| principal.role().is_admin());

    if !is_admin {
        return Err(ApiError::Forbidden);
    }

    Ok(next.run(req).await)
}

/// Exactly `Bearer <token>`: two parts split on a single space.
fn extract_bearer(headers: &HeaderMap) -> Result<&str, ApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .filter(|value| !value.is_empty())
        .ok_or(ApiError::MissingCredentials)?;

    let header = header.to_str().map_err(|_| ApiError::MalformedCredentials)?;

    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(ApiError::MalformedCredentials),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        Extension, Router,
        body::Body,
        http::{Request, StatusCode, header::HeaderValue},
        routing::get,
    };
    use tower::ServiceExt;

    use evently_auth::{Hs256TokenAuthority, Identity, Role};
    use evently_core::UserId;

    const SECRET: &str = "test-secret";

    fn headers(value: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        map
    }

    fn token_for(role: &'static str) -> String {
        Hs256TokenAuthority::new(SECRET)
            .issue(
                &Identity::new(UserId::from("u-1"), "a@x.com", Role::new(role)),
                Utc::now(),
            )
            .unwrap()
    }

    fn app() -> Router {
        let state = AuthState {
            tokens: Arc::new(Hs256TokenAuthority::new(SECRET)),
        };
        let authenticated = axum::middleware::from_fn_with_state(state, authenticate);

        let admin = Router::new()
            .route("/admin", get(|| async { "admin ok" }))
            .route_layer(axum::middleware::from_fn(require_admin))
            .route_layer(authenticated.clone());

        let me = Router::new()
            .route(
                "/me",
                get(|Extension(p): Extension<PrincipalContext>| async move { p.email().to_string() }),
            )
            .route_layer(authenticated);

        let bare_admin = Router::new()
            .route("/bare", get(|| async { "unreachable" }))
            .route_layer(axum::middleware::from_fn(require_admin));

        admin.merge(me).merge(bare_admin)
    }

    async fn call(path: &str, auth: Option<&str>) -> (StatusCode, String) {
        let mut req = Request::builder().uri(path);
        if let Some(auth) = auth {
            req = req.header(AUTHORIZATION, auth);
        }
        let res = app().oneshot(req.body(Body::empty()).unwrap()).await.unwrap();
        let status = res.status();
        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[test]
    fn bearer_parsing_follows_two_part_rule() {
        assert_eq!(extract_bearer(&headers("Bearer abc")).unwrap(), "abc");
        assert!(matches!(extract_bearer(&HeaderMap::new()), Err(ApiError::MissingCredentials)));
        assert!(matches!(extract_bearer(&headers("")), Err(ApiError::MissingCredentials)));
        assert!(matches!(extract_bearer(&headers("Basic abc")), Err(ApiError::MalformedCredentials)));
        assert!(matches!(extract_bearer(&headers("bearer abc")), Err(ApiError::MalformedCredentials)));
        assert!(matches!(extract_bearer(&headers("Bearer  abc")), Err(ApiError::MalformedCredentials)));
        assert!(matches!(extract_bearer(&headers("Bearer a b")), Err(ApiError::MalformedCredentials)));
        assert!(matches!(extract_bearer(&headers("Bearer")), Err(ApiError::MalformedCredentials)));
        // Two parts, empty token: passes parsing, fails verification later.
        assert_eq!(extract_bearer(&headers("Bearer ")).unwrap(), "");
    }

    #[tokio::test]
    async fn missing_header_is_401_with_message() {
        let (status, body) = call("/me", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, r#"{"message":"Missing authorization header"}"#);
    }

    #[tokio::test]
    async fn malformed_header_is_401() {
        let (status, body) = call("/me", Some("Token abc")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, r#"{"message":"Invalid authorization format"}"#);
    }

    #[tokio::test]
    async fn bad_token_is_401_before_role_check() {
        let (status, body) = call("/admin", Some("Bearer not.a.jwt")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, r#"{"message":"Invalid or expired token"}"#);
    }

    #[tokio::test]
    async fn valid_token_attaches_principal() {
        let token = token_for("user");
        let (status, body) = call("/me", Some(&format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "a@x.com");
    }

    #[tokio::test]
    async fn non_admin_is_forbidden() {
        let token = token_for("user");
        let (status, body) = call("/admin", Some(&format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, r#"{"message":"Admin only"}"#);
    }

    #[tokio::test]
    async fn admin_passes_both_gates() {
        let token = token_for("admin");
        let (status, body) = call("/admin", Some(&format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "admin ok");
    }

    #[tokio::test]
    async fn admin_gate_without_identity_is_forbidden() {
        let token = token_for("admin");
        let (status, _) = call("/bare", Some(&format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
