use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ferrobank_core::{AccountId, EmailAddress, LedgerError};

/// Externally-visible account identifier.
///
/// Fixed-width token: 2-letter country code, 2 check digits, 4-char bank
/// code, 10-digit numeric body (`^[A-Z]{2}[0-9]{2}[A-Z0-9]{4}[0-9]{10}$`).
/// The check digits are cosmetic (not a real mod-97 scheme) but the width
/// and character classes are a contract with callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub const LEN: usize = 18;

    /// Validate an externally supplied account number.
    pub fn parse(raw: &str) -> Result<Self, LedgerError> {
        if !Self::is_well_formed(raw) {
            return Err(LedgerError::invalid_argument(format!(
                "malformed account number: {raw}"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    /// Assemble a number from its fields. The format string pads the check
    /// value and body to their fixed widths, so the result is well-formed as
    /// long as the caller's country/bank codes are.
    pub(crate) fn from_parts(country: &str, check: u8, bank: &str, body: u64) -> Self {
        let raw = format!("{country}{check:02}{bank}{body:010}");
        debug_assert!(Self::is_well_formed(&raw), "bad candidate: {raw}");
        Self(raw)
    }

    fn is_well_formed(s: &str) -> bool {
        let b = s.as_bytes();
        b.len() == Self::LEN
            && b[0..2].iter().all(u8::is_ascii_uppercase)
            && b[2..4].iter().all(u8::is_ascii_digit)
            && b[4..8].iter().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
            && b[8..18].iter().all(u8::is_ascii_digit)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::str::FromStr for AccountNumber {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A ledger account.
///
/// Everything except `balance` is immutable after creation, and `balance`
/// is mutated exclusively by [`crate::LedgerEngine::transfer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub number: AccountNumber,
    pub owner_email: EmailAddress,
    pub display_name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
}

impl Account {
    /// Construct a freshly opened account. The caller has already validated
    /// `opening_balance >= 0` and allocated a unique number.
    pub fn open(
        number: AccountNumber,
        owner_email: EmailAddress,
        display_name: &str,
        opening_balance: Decimal,
    ) -> Self {
        Self {
            id: AccountId::new(),
            number,
            owner_email,
            display_name: display_name.to_string(),
            balance: opening_balance,
        }
    }
}

/// Outcome status of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferStatus {
    Success,
}

/// Ephemeral result of a completed transfer. Produced fresh per call and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub sender_number: AccountNumber,
    pub receiver_number: AccountNumber,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub status: TransferStatus,
}
