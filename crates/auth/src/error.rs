use thiserror::Error;

/// Typed failure of an authentication operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A user with this email already exists.
    #[error("a user with this email already exists")]
    EmailTaken,

    /// Unknown email or wrong password — deliberately one error so callers
    /// cannot probe which it was.
    #[error("either email or password is incorrect")]
    InvalidCredentials,

    /// Token failed signature, expiry, or shape checks.
    #[error("invalid or expired token")]
    InvalidToken,

    /// User store I/O failure (retryable).
    #[error("storage failure: {0}")]
    Storage(String),

    /// Internal fault (e.g. hashing backend); details belong in logs, not
    /// in responses.
    #[error("internal authentication failure")]
    Internal,
}
