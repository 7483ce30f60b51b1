//! `ferrobank-store` — storage backends for the ledger and auth seams.
//!
//! Currently in-memory only; durable backends would implement the same
//! traits.

pub mod in_memory;

pub use in_memory::{InMemoryAccountStore, InMemoryUserStore};
