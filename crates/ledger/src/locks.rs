//! Per-account lock table.
//!
//! Serializes concurrent read-modify-write cycles on a given account while
//! leaving unrelated accounts free of contention. The two locks of a
//! transfer pair are always acquired in sorted key order, so two transfers
//! moving funds in opposite directions between the same accounts cannot
//! deadlock.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use ferrobank_core::{LedgerError, LedgerResult};

use crate::account::AccountNumber;

/// Exclusive locks keyed by account number.
///
/// Entries are created on first use and kept for the process lifetime; the
/// key space is bounded by the number of accounts ever touched.
#[derive(Debug)]
pub struct AccountLocks {
    table: Mutex<HashMap<AccountNumber, Arc<Mutex<()>>>>,
    timeout: Duration,
}

impl AccountLocks {
    pub fn new(timeout: Duration) -> Self {
        Self {
            table: Mutex::new(HashMap::new()),
            timeout,
        }
    }

    fn handle(&self, key: &AccountNumber) -> Arc<Mutex<()>> {
        let mut table = self.table.lock();
        table.entry(key.clone()).or_default().clone()
    }

    /// Run `f` while holding exclusive locks on both account keys.
    ///
    /// Acquisition is ordered (smaller key first) and bounded: if either
    /// lock cannot be taken within the configured timeout the operation
    /// fails with `Busy` before anything has been read or written.
    /// `a == b` locks the key once.
    pub fn with_pair<T>(
        &self,
        a: &AccountNumber,
        b: &AccountNumber,
        f: impl FnOnce() -> T,
    ) -> LedgerResult<T> {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };

        let first_handle = self.handle(first);
        let Some(_first_guard) = first_handle.try_lock_for(self.timeout) else {
            return Err(LedgerError::Busy);
        };

        if first == second {
            return Ok(f());
        }

        let second_handle = self.handle(second);
        let Some(_second_guard) = second_handle.try_lock_for(self.timeout) else {
            return Err(LedgerError::Busy);
        };

        Ok(f())
    }
}
