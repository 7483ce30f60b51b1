//! In-memory stores.
//!
//! Intended for tests/dev and the default wiring. Not optimized for
//! performance.

use std::collections::HashMap;
use std::sync::RwLock;

use ferrobank_core::{AccountId, EmailAddress};
use ferrobank_ledger::{Account, AccountNumber, AccountStore, StoreError};

use ferrobank_auth::{User, UserStore, UserStoreError};

#[derive(Debug, Default)]
struct AccountState {
    by_id: HashMap<AccountId, Account>,
    id_by_number: HashMap<AccountNumber, AccountId>,
}

/// In-memory account store: id-keyed records plus a number index.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    inner: RwLock<AccountState>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn insert(&self, account: &Account) -> Result<(), StoreError> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        if state.id_by_number.contains_key(&account.number) {
            return Err(StoreError::DuplicateNumber);
        }

        state
            .id_by_number
            .insert(account.number.clone(), account.id);
        state.by_id.insert(account.id, account.clone());
        Ok(())
    }

    fn find_by_owner_and_id(
        &self,
        owner: &EmailAddress,
        id: AccountId,
    ) -> Result<Option<Account>, StoreError> {
        let state = self
            .inner
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        Ok(state
            .by_id
            .get(&id)
            .filter(|a| &a.owner_email == owner)
            .cloned())
    }

    fn find_by_owner_and_number(
        &self,
        owner: &EmailAddress,
        number: &AccountNumber,
    ) -> Result<Option<Account>, StoreError> {
        let state = self
            .inner
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        Ok(state
            .id_by_number
            .get(number)
            .and_then(|id| state.by_id.get(id))
            .filter(|a| &a.owner_email == owner)
            .cloned())
    }

    fn find_by_number(&self, number: &AccountNumber) -> Result<Option<Account>, StoreError> {
        let state = self
            .inner
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        Ok(state
            .id_by_number
            .get(number)
            .and_then(|id| state.by_id.get(id))
            .cloned())
    }

    fn find_all_by_owner(&self, owner: &EmailAddress) -> Result<Vec<Account>, StoreError> {
        let state = self
            .inner
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        Ok(state
            .by_id
            .values()
            .filter(|a| &a.owner_email == owner)
            .cloned()
            .collect())
    }

    fn save_all(&self, accounts: &[Account]) -> Result<(), StoreError> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        // Validate the whole batch before mutating anything, so the save is
        // observed all-or-nothing even on a bad input.
        for account in accounts {
            if !state.by_id.contains_key(&account.id) {
                return Err(StoreError::Backend(format!(
                    "save_all: unknown account {}",
                    account.id
                )));
            }
        }

        for account in accounts {
            state.by_id.insert(account.id, account.clone());
        }
        Ok(())
    }
}

/// In-memory user store keyed by (unique) email.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<HashMap<EmailAddress, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn insert(&self, user: &User) -> Result<(), UserStoreError> {
        let mut users = self
            .inner
            .write()
            .map_err(|_| UserStoreError::Backend("lock poisoned".to_string()))?;
        if users.contains_key(&user.email) {
            return Err(UserStoreError::DuplicateEmail);
        }
        users.insert(user.email.clone(), user.clone());
        Ok(())
    }

    fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserStoreError> {
        let users = self
            .inner
            .read()
            .map_err(|_| UserStoreError::Backend("lock poisoned".to_string()))?;
        Ok(users.get(email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ferrobank_core::UserId;
    use rust_decimal::Decimal;

    fn account(owner: &str, number: &str, balance: &str) -> Account {
        Account::open(
            AccountNumber::parse(number).unwrap(),
            EmailAddress::parse(owner).unwrap(),
            "test account",
            balance.parse::<Decimal>().unwrap(),
        )
    }

    #[test]
    fn insert_is_conditional_on_number() {
        let store = InMemoryAccountStore::new();
        let a = account("alice@x.com", "NL10FERO0000000001", "10");
        let b = account("bob@x.com", "NL10FERO0000000001", "20");

        store.insert(&a).unwrap();
        assert_eq!(store.insert(&b).unwrap_err(), StoreError::DuplicateNumber);
        // The loser's record must not be visible under any key.
        assert_eq!(
            store
                .find_by_number(&b.number)
                .unwrap()
                .unwrap()
                .owner_email,
            a.owner_email
        );
    }

    #[test]
    fn save_all_with_unknown_account_changes_nothing() {
        let store = InMemoryAccountStore::new();
        let mut a = account("alice@x.com", "NL10FERO0000000001", "10");
        let ghost = account("ghost@x.com", "NL10FERO0000000002", "99");
        store.insert(&a).unwrap();

        a.balance = "5".parse().unwrap();
        assert!(matches!(
            store.save_all(&[a.clone(), ghost]),
            Err(StoreError::Backend(_))
        ));
        assert_eq!(
            store.find_by_number(&a.number).unwrap().unwrap().balance,
            "10".parse::<Decimal>().unwrap()
        );
    }

    #[test]
    fn owner_scoped_lookups_filter_by_owner() {
        let store = InMemoryAccountStore::new();
        let a = account("alice@x.com", "NL10FERO0000000001", "10");
        store.insert(&a).unwrap();

        let bob = EmailAddress::parse("bob@x.com").unwrap();
        assert!(store.find_by_owner_and_id(&bob, a.id).unwrap().is_none());
        assert!(store
            .find_by_owner_and_number(&bob, &a.number)
            .unwrap()
            .is_none());
        assert!(store.find_all_by_owner(&bob).unwrap().is_empty());
        assert!(store
            .find_by_owner_and_id(&a.owner_email, a.id)
            .unwrap()
            .is_some());
    }

    #[test]
    fn user_insert_is_conditional_on_email() {
        let store = InMemoryUserStore::new();
        let user = User {
            id: UserId::new(),
            email: EmailAddress::parse("alice@x.com").unwrap(),
            display_name: "Alice".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            created_at: Utc::now(),
        };
        store.insert(&user).unwrap();
        assert_eq!(
            store.insert(&user).unwrap_err(),
            UserStoreError::DuplicateEmail
        );
    }
}
