//! Service wiring for the API process.
//!
//! Everything runs over the in-memory stores; a durable backend would slot
//! in behind the same `AccountStore`/`UserStore` traits.

use std::sync::Arc;

use chrono::Duration;

use ferrobank_auth::{Hs256Tokens, SessionService, UserService};
use ferrobank_ledger::{AccountQueries, LedgerEngine};
use ferrobank_store::{InMemoryAccountStore, InMemoryUserStore};

type AccountBackend = Arc<InMemoryAccountStore>;
type UserBackend = Arc<InMemoryUserStore>;

/// How long an issued session token stays valid.
const SESSION_TTL_MINUTES: i64 = 60;

/// All services a request handler can reach, behind one `Arc` extension.
pub struct AppServices {
    pub engine: Arc<LedgerEngine<AccountBackend>>,
    pub queries: AccountQueries<AccountBackend>,
    pub users: Arc<UserService<UserBackend>>,
    pub sessions: SessionService<UserBackend>,
    pub tokens: Arc<Hs256Tokens>,
}

pub fn build_services(jwt_secret: &[u8]) -> AppServices {
    let accounts: AccountBackend = Arc::new(InMemoryAccountStore::new());
    let engine = Arc::new(LedgerEngine::new(accounts));
    let queries = AccountQueries::new(engine.clone());

    let users = Arc::new(UserService::new(Arc::new(InMemoryUserStore::new())));
    let tokens = Arc::new(Hs256Tokens::new(
        jwt_secret,
        Duration::minutes(SESSION_TTL_MINUTES),
    ));
    let sessions = SessionService::new(users.clone(), tokens.clone());

    AppServices {
        engine,
        queries,
        users,
        sessions,
        tokens,
    }
}
