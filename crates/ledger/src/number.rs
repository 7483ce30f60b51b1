//! Account number synthesis.
//!
//! Candidates are random; uniqueness is the engine's job (store lookup plus
//! conditional insert, bounded by [`AccountNumberGenerator::MAX_ATTEMPTS`]).
//! The candidate space is large enough (10^10 numeric bodies times 90 check
//! values) that the retry budget exists only to guard against a degenerate
//! store or generator, not as a normal code path.

use rand::Rng;

use crate::account::AccountNumber;

const COUNTRY_CODE: &str = "NL";
const BANK_CODE: &str = "FERO";

/// Produces syntactically valid account-number candidates.
#[derive(Debug, Clone, Default)]
pub struct AccountNumberGenerator;

impl AccountNumberGenerator {
    /// Upper bound on generate-and-check attempts before the engine gives up
    /// with `ResourceExhausted`.
    pub const MAX_ATTEMPTS: usize = 50;

    pub fn new() -> Self {
        Self
    }

    /// Synthesize one random candidate.
    pub fn generate(&self) -> AccountNumber {
        let mut rng = rand::thread_rng();
        let check: u8 = rng.gen_range(10..=99);
        let body: u64 = rng.gen_range(1_000_000_000..=9_999_999_999);
        AccountNumber::from_parts(COUNTRY_CODE, check, BANK_CODE, body)
    }
}
