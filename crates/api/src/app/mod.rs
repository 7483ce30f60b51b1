//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: service wiring (stores, ledger engine, auth services)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use ferrobank_auth::TokenVerifier;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(jwt_secret: String) -> Router {
    let services = Arc::new(services::build_services(jwt_secret.as_bytes()));
    let auth_state = middleware::AuthState {
        tokens: services.tokens.clone() as Arc<dyn TokenVerifier>,
    };

    // Protected routes: require a valid bearer token.
    let protected = routes::router()
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/users", post(routes::users::sign_up))
        .route("/sessions", post(routes::sessions::login))
        .merge(protected)
        .layer(Extension(services))
}
