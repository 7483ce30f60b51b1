//! Signup and session services.

use std::sync::Arc;

use chrono::Utc;

use ferrobank_core::{EmailAddress, UserId};

use crate::error::AuthError;
use crate::password;
use crate::token::Hs256Tokens;
use crate::user::{User, UserStore, UserStoreError};

fn store_failure(err: UserStoreError) -> AuthError {
    match err {
        // Callers of `sign_up` translate the duplicate case before this
        // mapping; anything else reaching here is a backend fault.
        UserStoreError::DuplicateEmail => AuthError::EmailTaken,
        UserStoreError::Backend(msg) => AuthError::Storage(msg),
    }
}

/// User registration and credential verification.
pub struct UserService<U> {
    store: U,
}

impl<U: UserStore> UserService<U> {
    pub fn new(store: U) -> Self {
        Self { store }
    }

    /// Register a new user. The email must not already be taken; the
    /// password is hashed before anything is persisted.
    pub fn sign_up(
        &self,
        display_name: &str,
        email: &EmailAddress,
        password: &str,
    ) -> Result<User, AuthError> {
        if self
            .store
            .find_by_email(email)
            .map_err(store_failure)?
            .is_some()
        {
            return Err(AuthError::EmailTaken);
        }

        let user = User {
            id: UserId::new(),
            email: email.clone(),
            display_name: display_name.to_string(),
            password_hash: password::hash_password(password)?,
            created_at: Utc::now(),
        };

        // The conditional insert closes the check-then-insert race.
        self.store.insert(&user).map_err(store_failure)?;
        tracing::info!(email = %email, "user registered");
        Ok(user)
    }

    /// Verify login credentials, yielding the user on success.
    ///
    /// Unknown email and wrong password collapse into one error.
    pub fn verify_login(&self, email: &EmailAddress, password: &str) -> Result<User, AuthError> {
        let user = self
            .store
            .find_by_email(email)
            .map_err(store_failure)?
            .ok_or(AuthError::InvalidCredentials)?;

        if !password::verify_password(&user.password_hash, password)? {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(user)
    }
}

/// Login: credential check plus token issuance.
pub struct SessionService<U> {
    users: Arc<UserService<U>>,
    tokens: Arc<Hs256Tokens>,
}

impl<U: UserStore> SessionService<U> {
    pub fn new(users: Arc<UserService<U>>, tokens: Arc<Hs256Tokens>) -> Self {
        Self { users, tokens }
    }

    pub fn login(&self, email: &EmailAddress, password: &str) -> Result<String, AuthError> {
        let user = self.users.verify_login(email, password)?;
        tracing::info!(email = %user.email, "session issued");
        self.tokens.issue(&user.email)
    }
}
