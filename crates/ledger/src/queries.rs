//! Read-side facade over the engine's lookups.
//!
//! Thin by design: it only reshapes accounts into the response form the API
//! returns to callers.

use rust_decimal::Decimal;
use serde::Serialize;

use ferrobank_core::{AccountId, EmailAddress, LedgerResult};

use crate::account::Account;
use crate::engine::LedgerEngine;
use crate::store::AccountStore;

/// Caller-facing view of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountDetails {
    pub account_id: AccountId,
    pub number: String,
    pub owner_email: String,
    pub display_name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
}

impl From<Account> for AccountDetails {
    fn from(account: Account) -> Self {
        Self {
            account_id: account.id,
            number: account.number.as_str().to_string(),
            owner_email: account.owner_email.as_str().to_string(),
            display_name: account.display_name,
            balance: account.balance,
        }
    }
}

/// Owner-scoped account queries.
pub struct AccountQueries<S> {
    engine: std::sync::Arc<LedgerEngine<S>>,
}

impl<S: AccountStore> AccountQueries<S> {
    pub fn new(engine: std::sync::Arc<LedgerEngine<S>>) -> Self {
        Self { engine }
    }

    pub fn get(&self, id: AccountId, owner: &EmailAddress) -> LedgerResult<AccountDetails> {
        self.engine.get_account(id, owner).map(AccountDetails::from)
    }

    pub fn list(&self, owner: &EmailAddress) -> LedgerResult<Vec<AccountDetails>> {
        Ok(self
            .engine
            .list_accounts(owner)?
            .into_iter()
            .map(AccountDetails::from)
            .collect())
    }
}
