//! Request/response DTOs.
//!
//! Monetary amounts travel as decimal strings on the wire, never as JSON
//! floats. Account numbers arrive as plain strings and are validated in the
//! handlers so a malformed one gets a proper error body instead of a
//! deserializer rejection.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ferrobank_auth::User;
use ferrobank_core::UserId;
use ferrobank_ledger::{TransferRecord, TransferStatus};

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub display_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct OpenAccountRequest {
    pub owner_email: String,
    pub display_name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub opening_balance: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    pub sender_number: String,
    pub receiver_number: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

/// Public view of a user. Deliberately excludes the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: UserId,
    pub email: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.as_str().to_string(),
            display_name: user.display_name,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct TransferResponse {
    pub sender_number: String,
    pub receiver_number: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub status: TransferStatus,
}

impl From<TransferRecord> for TransferResponse {
    fn from(record: TransferRecord) -> Self {
        Self {
            sender_number: record.sender_number.to_string(),
            receiver_number: record.receiver_number.to_string(),
            amount: record.amount,
            status: record.status,
        }
    }
}
