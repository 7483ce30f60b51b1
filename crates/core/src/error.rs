//! Ledger error model.
//!
//! Every operation of the ledger surfaces one of these typed failures; the
//! HTTP layer maps them to status codes. `Storage` and `Busy` are the only
//! retryable kinds — everything else is permanent for the given input.

use thiserror::Error;

/// Result type used across the ledger domain.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Typed failure of a ledger operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A value failed validation (e.g. negative opening balance, bad id).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Transfer amount was zero or negative.
    #[error("transfer amount must be greater than zero")]
    InvalidAmount,

    /// Account lookup or transfer attempted by a non-owner.
    ///
    /// Deliberately covers both "does not exist" and "owned by someone
    /// else" so existence cannot be probed.
    #[error("unauthorized")]
    Unauthorized,

    /// Receiver account number does not resolve to any account.
    #[error("receiver account number does not exist")]
    InvalidReceiver,

    /// Transfer amount exceeds the sender's balance.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// Account number allocation exceeded its retry budget.
    #[error("account number allocation retries exhausted")]
    ResourceExhausted,

    /// Durable-store I/O failure (retryable).
    #[error("storage failure: {0}")]
    Storage(String),

    /// Lock contention timeout (retryable); balances were left unchanged.
    #[error("accounts are busy, retry the transfer")]
    Busy,
}

impl LedgerError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Whether the caller may retry the same request unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Busy)
    }
}
