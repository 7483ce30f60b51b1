//! The ledger engine: account creation, balance lookup, transfers.
//!
//! Callers hand in the authenticated principal explicitly on every
//! operation; the engine holds no ambient identity state.

use std::time::Duration;

use rust_decimal::Decimal;

use ferrobank_core::{AccountId, EmailAddress, LedgerError, LedgerResult};

use crate::account::{Account, AccountNumber, TransferRecord, TransferStatus};
use crate::locks::AccountLocks;
use crate::number::AccountNumberGenerator;
use crate::store::{AccountStore, StoreError};

/// How long a transfer will wait on a contended account before giving up
/// with the retryable `Busy` error.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(2);

/// Account ledger and transfer engine, generic over its storage backend.
#[derive(Debug)]
pub struct LedgerEngine<S> {
    store: S,
    generator: AccountNumberGenerator,
    locks: AccountLocks,
}

impl<S: AccountStore> LedgerEngine<S> {
    pub fn new(store: S) -> Self {
        Self::with_lock_timeout(store, DEFAULT_LOCK_TIMEOUT)
    }

    pub fn with_lock_timeout(store: S, lock_timeout: Duration) -> Self {
        Self {
            store,
            generator: AccountNumberGenerator::new(),
            locks: AccountLocks::new(lock_timeout),
        }
    }

    /// Open a new account with a freshly allocated, globally unique number.
    ///
    /// The HTTP layer validates the opening balance; the engine still rejects
    /// negatives defensively. Candidate numbers that turn out taken — at
    /// lookup time or by losing the conditional insert race — count against
    /// one bounded retry budget.
    pub fn open_account(
        &self,
        owner: &EmailAddress,
        display_name: &str,
        opening_balance: Decimal,
    ) -> LedgerResult<Account> {
        if opening_balance < Decimal::ZERO {
            return Err(LedgerError::invalid_argument(
                "opening balance must not be negative",
            ));
        }

        for _ in 0..AccountNumberGenerator::MAX_ATTEMPTS {
            let number = self.generator.generate();
            if self.store.find_by_number(&number)?.is_some() {
                continue;
            }

            let account = Account::open(number, owner.clone(), display_name, opening_balance);
            match self.store.insert(&account) {
                Ok(()) => {
                    tracing::info!(owner = %owner, number = %account.number, "account opened");
                    return Ok(account);
                }
                Err(StoreError::DuplicateNumber) => continue,
                Err(err) => return Err(err.into()),
            }
        }

        tracing::error!(owner = %owner, "account number allocation retries exhausted");
        Err(LedgerError::ResourceExhausted)
    }

    /// Look up a single account, visible only to its owner.
    ///
    /// "No such id" and "owned by someone else" are indistinguishable on
    /// purpose: both are `Unauthorized`.
    pub fn get_account(&self, id: AccountId, owner: &EmailAddress) -> LedgerResult<Account> {
        self.store
            .find_by_owner_and_id(owner, id)?
            .ok_or(LedgerError::Unauthorized)
    }

    /// All accounts owned by `owner`, in store-native order (not a contract).
    pub fn list_accounts(&self, owner: &EmailAddress) -> LedgerResult<Vec<Account>> {
        Ok(self.store.find_all_by_owner(owner)?)
    }

    /// Move `amount` from the requester's account to the receiver's.
    ///
    /// Validation order is fixed so error precedence is deterministic:
    /// amount positivity, sender ownership, receiver existence, funds
    /// sufficiency, then the atomic apply-and-persist. Resolution and
    /// mutation happen inside the per-account pair lock, so concurrent
    /// transfers touching a common account serialize and no update is lost.
    pub fn transfer(
        &self,
        sender_number: &AccountNumber,
        receiver_number: &AccountNumber,
        amount: Decimal,
        requesting_owner: &EmailAddress,
    ) -> LedgerResult<TransferRecord> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }

        tracing::info!(
            sender = %sender_number,
            receiver = %receiver_number,
            %amount,
            "starting transfer"
        );

        self.locks.with_pair(sender_number, receiver_number, || {
            let mut sender = self
                .store
                .find_by_owner_and_number(requesting_owner, sender_number)?
                .ok_or(LedgerError::Unauthorized)?;
            let mut receiver = self
                .store
                .find_by_number(receiver_number)?
                .ok_or(LedgerError::InvalidReceiver)?;

            if amount > sender.balance {
                return Err(LedgerError::InsufficientFunds);
            }

            if sender.id == receiver.id {
                // Debit and credit cancel out; nothing to persist.
                return Ok(());
            }

            sender.balance -= amount;
            receiver.balance += amount;
            self.store.save_all(&[sender, receiver])?;
            Ok(())
        })??;

        tracing::info!(
            sender = %sender_number,
            receiver = %receiver_number,
            %amount,
            "transfer committed"
        );

        Ok(TransferRecord {
            sender_number: sender_number.clone(),
            receiver_number: receiver_number.clone(),
            amount,
            status: TransferStatus::Success,
        })
    }
}
