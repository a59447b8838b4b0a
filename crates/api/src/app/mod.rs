//! Application assembly: services, router, middleware stack.

use std::sync::Arc;

use axum::{Extension, Router, http::StatusCode, routing::get};
use chrono::Duration;
use tower::ServiceBuilder;

use cartshare_auth::{Hs256TokenCodec, TokenVerifier};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Access-token lifetime.
const TOKEN_TTL_HOURS: i64 = 24;

pub fn build_app(jwt_secret: String) -> Router {
    let tokens = Arc::new(Hs256TokenCodec::new(
        jwt_secret.as_bytes(),
        Duration::hours(TOKEN_TTL_HOURS),
    ));
    let auth_state = crate::middleware::AuthState {
        verifier: tokens.clone() as Arc<dyn TokenVerifier>,
    };

    let services = Arc::new(AppServices::in_memory(tokens));

    // Protected routes: require an authenticated user.
    let protected = Router::new()
        .merge(routes::friends::router())
        .merge(routes::purchases::router())
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            crate::middleware::auth_middleware,
        ));

    // Public routes: registration, login, and the commerce ingestion webhook
    // (unauthenticated upstream, matching the original's trust gap).
    let public = Router::new()
        .merge(routes::auth::router())
        .merge(routes::purchases::webhook_router());

    Router::new()
        .route("/health", get(health))
        .nest("/api", public.merge(protected))
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}

async fn health() -> StatusCode {
    StatusCode::OK
}
