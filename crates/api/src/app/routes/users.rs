use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use ferrobank_core::EmailAddress;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn sign_up(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::SignUpRequest>,
) -> axum::response::Response {
    let email = match EmailAddress::parse(&body.email) {
        Ok(e) => e,
        Err(e) => return errors::ledger_error_to_response(e),
    };
    if body.password.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "password must not be empty",
        );
    }

    match services.users.sign_up(&body.display_name, &email, &body.password) {
        Ok(user) => (StatusCode::CREATED, Json(dto::UserResponse::from(user))).into_response(),
        Err(e) => errors::auth_error_to_response(e),
    }
}
