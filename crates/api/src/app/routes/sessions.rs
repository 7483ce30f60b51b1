use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use ferrobank_core::EmailAddress;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    // A syntactically bad email can't belong to any user; report it the same
    // way as a failed login so the endpoint stays probe-resistant.
    let email = match EmailAddress::parse(&body.email) {
        Ok(e) => e,
        Err(_) => return errors::auth_error_to_response(ferrobank_auth::AuthError::InvalidCredentials),
    };

    match services.sessions.login(&email, &body.password) {
        Ok(token) => (StatusCode::OK, Json(dto::TokenResponse { token })).into_response(),
        Err(e) => errors::auth_error_to_response(e),
    }
}
