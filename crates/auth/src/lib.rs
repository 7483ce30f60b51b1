//! `ferrobank-auth` — authentication boundary: users, passwords, tokens.
//!
//! Decoupled from HTTP and from storage mechanics. The HTTP layer verifies
//! bearer tokens through [`TokenVerifier`] and then passes the resulting
//! identity *explicitly* into every ledger call.

pub mod error;
pub mod password;
pub mod service;
pub mod token;
pub mod user;

pub use error::AuthError;
pub use service::{SessionService, UserService};
pub use token::{Claims, Hs256Tokens, TokenVerifier};
pub use user::{User, UserStore, UserStoreError};
