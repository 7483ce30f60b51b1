//! `ferrobank-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod email;
pub mod error;
pub mod id;

pub use email::EmailAddress;
pub use error::{LedgerError, LedgerResult};
pub use id::{AccountId, UserId};
