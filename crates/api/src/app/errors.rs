//! Consistent JSON error responses.
//!
//! Storage and internal faults never leak backend detail to the caller; the
//! detail goes to the logs and the response body stays generic.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use ferrobank_auth::AuthError;
use ferrobank_core::LedgerError;

pub fn ledger_error_to_response(err: LedgerError) -> axum::response::Response {
    match err {
        LedgerError::InvalidArgument(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        LedgerError::InvalidAmount | LedgerError::InvalidReceiver | LedgerError::InsufficientFunds => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", err.to_string())
        }
        LedgerError::Unauthorized => {
            json_error(StatusCode::UNAUTHORIZED, "unauthorized", "unauthorized")
        }
        LedgerError::Busy | LedgerError::ResourceExhausted => json_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "unavailable",
            err.to_string(),
        ),
        LedgerError::Storage(detail) => {
            tracing::error!(%detail, "storage failure");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage_error",
                "internal storage failure",
            )
        }
    }
}

pub fn auth_error_to_response(err: AuthError) -> axum::response::Response {
    match err {
        AuthError::EmailTaken => json_error(StatusCode::BAD_REQUEST, "email_taken", err.to_string()),
        AuthError::InvalidCredentials | AuthError::InvalidToken => {
            json_error(StatusCode::UNAUTHORIZED, "unauthorized", err.to_string())
        }
        AuthError::Storage(detail) => {
            tracing::error!(%detail, "user store failure");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage_error",
                "internal storage failure",
            )
        }
        AuthError::Internal => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "internal authentication failure",
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
