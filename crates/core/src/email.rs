//! Owner identity as a validated email address.
//!
//! The engine trusts the authenticated identity it is handed; this type only
//! guarantees the value is shaped like an email so it can serve as a stable
//! owner key.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// A syntactically plausible, lower-cased email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and normalize (lower-case) an email address.
    pub fn parse(raw: &str) -> Result<Self, LedgerError> {
        let trimmed = raw.trim();
        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(LedgerError::invalid_argument("email must contain '@'"));
        };
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(LedgerError::invalid_argument(format!(
                "malformed email address: {trimmed}"
            )));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EmailAddress {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
