use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use ferrobank_core::{EmailAddress, UserId};

/// A registered user.
///
/// `password_hash` is an argon2id PHC string; it never leaves this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub display_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserStoreError {
    /// Conditional insert lost: the email is already registered.
    #[error("email already registered")]
    DuplicateEmail,

    /// Backend I/O failure.
    #[error("store backend failure: {0}")]
    Backend(String),
}

/// Durable keyed storage for user records.
pub trait UserStore: Send + Sync {
    /// Persist a new user; fails with [`UserStoreError::DuplicateEmail`] if
    /// the email is taken (uniqueness check and insert as one conditional
    /// operation).
    fn insert(&self, user: &User) -> Result<(), UserStoreError>;

    fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserStoreError>;
}

impl<S: UserStore + ?Sized> UserStore for Arc<S> {
    fn insert(&self, user: &User) -> Result<(), UserStoreError> {
        (**self).insert(user)
    }

    fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserStoreError> {
        (**self).find_by_email(email)
    }
}
