use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use ferrobank_core::{AccountId, EmailAddress};
use ferrobank_ledger::AccountNumber;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(open_account).get(list_accounts))
        .route("/:id", get(get_account))
        .route("/transactions", post(transfer))
}

pub async fn open_account(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<dto::OpenAccountRequest>,
) -> axum::response::Response {
    let owner = match EmailAddress::parse(&body.owner_email) {
        Ok(e) => e,
        Err(e) => return errors::ledger_error_to_response(e),
    };
    // An account may only be opened for the authenticated user themselves.
    if &owner != principal.email() {
        return errors::json_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "owner email does not match the authenticated user",
        );
    }

    match services
        .engine
        .open_account(&owner, &body.display_name, body.opening_balance)
    {
        Ok(account) => (
            StatusCode::CREATED,
            Json(ferrobank_ledger::AccountDetails::from(account)),
        )
            .into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn list_accounts(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    match services.queries.list(principal.email()) {
        Ok(items) => {
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn get_account(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match id.parse::<AccountId>() {
        Ok(id) => id,
        Err(e) => return errors::ledger_error_to_response(e),
    };

    match services.queries.get(id, principal.email()) {
        Ok(details) => (StatusCode::OK, Json(details)).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn transfer(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<dto::TransferRequest>,
) -> axum::response::Response {
    let sender = match AccountNumber::parse(&body.sender_number) {
        Ok(n) => n,
        Err(e) => return errors::ledger_error_to_response(e),
    };
    let receiver = match AccountNumber::parse(&body.receiver_number) {
        Ok(n) => n,
        Err(e) => return errors::ledger_error_to_response(e),
    };

    match services
        .engine
        .transfer(&sender, &receiver, body.amount, principal.email())
    {
        Ok(record) => {
            (StatusCode::OK, Json(dto::TransferResponse::from(record))).into_response()
        }
        Err(e) => errors::ledger_error_to_response(e),
    }
}
