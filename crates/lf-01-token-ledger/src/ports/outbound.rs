//! Outbound (Driven) ports for the Token Ledger subsystem.

use shared_types::{Amount, Principal};

/// Balance table abstraction, keyed by investor identity.
///
/// Owned exclusively by a `TokenLedger`; no other component writes to it.
pub trait BalanceStore: Send + Sync {
    /// Returns the stored balance, or `None` for an unknown investor.
    fn balance(&self, investor: &Principal) -> Option<Amount>;

    /// Overwrites the balance for `investor`.
    fn put_balance(&mut self, investor: Principal, amount: Amount);

    /// Number of investors holding a balance entry.
    fn holder_count(&self) -> usize;
}
