//! # Pro-Rata Token Minting
//!
//! Tokens for a contribution are priced at the pool's current
//! tokens-per-unit-invested ratio, truncated toward zero. The first
//! contribution into an unfunded pool bootstraps the ratio at 1:1.
//!
//! Truncation never mints more than the exact share, so the ratio
//! `total_tokens / total_invested` never rises above 1 and existing holders
//! are never diluted by rounding.

use super::entities::{Amount, CaseInvestmentPool};
use primitive_types::U256;
use shared_types::LedgerError;

/// Computes the tokens minted for `amount` against `pool`.
///
/// Uses a 256-bit intermediate, so `amount * total_tokens` cannot overflow
/// for any pair of `u128` operands. An unfunded pool never reaches the
/// division.
///
/// # Errors
/// - `ArithmeticOverflow` if the quotient does not fit in an `Amount`
pub fn tokens_to_mint(amount: Amount, pool: &CaseInvestmentPool) -> Result<Amount, LedgerError> {
    if pool.is_unfunded() {
        return Ok(amount);
    }

    let product = U256::from(amount) * U256::from(pool.total_tokens);
    let quotient = product / U256::from(pool.total_invested);

    if quotient > U256::from(Amount::MAX) {
        return Err(LedgerError::ArithmeticOverflow {
            context: "minted token amount",
        });
    }
    Ok(quotient.as_u128())
}
