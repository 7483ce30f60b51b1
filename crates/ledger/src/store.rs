//! Storage seam for account records.
//!
//! The engine only depends on this trait; backends live elsewhere. The
//! contract deliberately mirrors a keyed document store: point lookups by
//! id/number (optionally owner-scoped) and an all-or-nothing multi-record
//! save for the transfer pair.

use std::sync::Arc;

use thiserror::Error;

use ferrobank_core::{AccountId, EmailAddress, LedgerError};

use crate::account::{Account, AccountNumber};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Conditional insert lost: the account number is already taken.
    #[error("account number already exists")]
    DuplicateNumber,

    /// Backend I/O failure.
    #[error("store backend failure: {0}")]
    Backend(String),
}

impl From<StoreError> for LedgerError {
    fn from(err: StoreError) -> Self {
        match err {
            // A duplicate surviving the engine's retry loop is a store-level
            // anomaly, not a caller mistake.
            StoreError::DuplicateNumber => {
                LedgerError::storage("conditional insert rejected: duplicate account number")
            }
            StoreError::Backend(msg) => LedgerError::Storage(msg),
        }
    }
}

/// Durable keyed storage for account records.
pub trait AccountStore: Send + Sync {
    /// Persist a new account. Fails with [`StoreError::DuplicateNumber`] if
    /// the account number is already present (uniqueness-check-then-insert
    /// as one conditional operation).
    fn insert(&self, account: &Account) -> Result<(), StoreError>;

    fn find_by_owner_and_id(
        &self,
        owner: &EmailAddress,
        id: AccountId,
    ) -> Result<Option<Account>, StoreError>;

    fn find_by_owner_and_number(
        &self,
        owner: &EmailAddress,
        number: &AccountNumber,
    ) -> Result<Option<Account>, StoreError>;

    fn find_by_number(&self, number: &AccountNumber) -> Result<Option<Account>, StoreError>;

    fn find_all_by_owner(&self, owner: &EmailAddress) -> Result<Vec<Account>, StoreError>;

    /// Persist updated records as a single all-or-nothing operation.
    fn save_all(&self, accounts: &[Account]) -> Result<(), StoreError>;
}

impl<S: AccountStore + ?Sized> AccountStore for Arc<S> {
    fn insert(&self, account: &Account) -> Result<(), StoreError> {
        (**self).insert(account)
    }

    fn find_by_owner_and_id(
        &self,
        owner: &EmailAddress,
        id: AccountId,
    ) -> Result<Option<Account>, StoreError> {
        (**self).find_by_owner_and_id(owner, id)
    }

    fn find_by_owner_and_number(
        &self,
        owner: &EmailAddress,
        number: &AccountNumber,
    ) -> Result<Option<Account>, StoreError> {
        (**self).find_by_owner_and_number(owner, number)
    }

    fn find_by_number(&self, number: &AccountNumber) -> Result<Option<Account>, StoreError> {
        (**self).find_by_number(number)
    }

    fn find_all_by_owner(&self, owner: &EmailAddress) -> Result<Vec<Account>, StoreError> {
        (**self).find_all_by_owner(owner)
    }

    fn save_all(&self, accounts: &[Account]) -> Result<(), StoreError> {
        (**self).save_all(accounts)
    }
}
