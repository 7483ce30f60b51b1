//! `ferrobank-ledger` — account ledger and transfer engine.
//!
//! Owns account creation, balance lookup and the balance-transfer operation,
//! and enforces the money invariants: account numbers are globally unique,
//! balances never go negative, and a transfer conserves the sum of the two
//! balances it touches even under concurrent invocation.

pub mod account;
pub mod engine;
pub mod locks;
pub mod number;
pub mod queries;
pub mod store;

pub use account::{Account, AccountNumber, TransferRecord, TransferStatus};
pub use engine::LedgerEngine;
pub use locks::AccountLocks;
pub use number::AccountNumberGenerator;
pub use queries::{AccountDetails, AccountQueries};
pub use store::{AccountStore, StoreError};
