//! # Inbound Port - TokenLedgerApi
//!
//! Read-side API of the token ledger. Minting is deliberately not part of
//! this trait: it is reachable only through the Investment Pool's
//! `TokenMinter` port.

use shared_types::{Amount, Principal};

/// Primary read API for the Token Ledger subsystem.
pub trait TokenLedgerApi {
    /// Returns the investor's balance, 0 for unknown investors.
    fn balance_of(&self, investor: &Principal) -> Amount;

    /// Returns the sum of all balances.
    fn total_supply(&self) -> Amount;

    /// Returns the number of investors that have ever been credited.
    fn holder_count(&self) -> usize;
}
