//! # Token Ledger
//!
//! Mint-only balance book for case claim tokens.
//!
//! ## Invariants Enforced
//!
//! - INVARIANT-1: Balances never decrease (no transfer/burn path exists)
//! - INVARIANT-2: `total_supply` equals the sum of all balances
//! - INVARIANT-3: A mint that would overflow writes nothing

use crate::adapters::InMemoryBalanceStore;
use crate::ports::{BalanceStore, TokenLedgerApi};
use shared_types::{Amount, LedgerError, Principal};
use tracing::debug;

/// Per-investor claim token balances.
#[derive(Debug)]
pub struct TokenLedger<S: BalanceStore = InMemoryBalanceStore> {
    /// Balance table.
    store: S,
    /// Sum of all balances.
    total_supply: Amount,
}

impl TokenLedger<InMemoryBalanceStore> {
    /// Creates an empty ledger backed by memory.
    pub fn in_memory() -> Self {
        Self::new(InMemoryBalanceStore::new())
    }
}

impl<S: BalanceStore> TokenLedger<S> {
    /// Creates a ledger over an empty balance store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            total_supply: 0,
        }
    }

    /// Credits `amount` freshly minted tokens to `investor`.
    ///
    /// Returns the investor's new balance. Minting zero tokens is legal and
    /// still records the investor as a holder.
    ///
    /// # Errors
    /// - `ArithmeticOverflow` if the balance or total supply would overflow;
    ///   nothing is written in that case
    pub fn mint(&mut self, investor: &Principal, amount: Amount) -> Result<Amount, LedgerError> {
        let current = self.balance_of(investor);
        let new_balance = current
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow {
                context: "investor token balance",
            })?;
        let new_supply =
            self.total_supply
                .checked_add(amount)
                .ok_or(LedgerError::ArithmeticOverflow {
                    context: "token total supply",
                })?;

        self.store.put_balance(investor.clone(), new_balance);
        self.total_supply = new_supply;

        debug!(investor = %investor, minted = amount, balance = new_balance, "Tokens minted");
        Ok(new_balance)
    }
}

impl<S: BalanceStore> TokenLedgerApi for TokenLedger<S> {
    fn balance_of(&self, investor: &Principal) -> Amount {
        self.store.balance(investor).unwrap_or(0)
    }

    fn total_supply(&self) -> Amount {
        self.total_supply
    }

    fn holder_count(&self) -> usize {
        self.store.holder_count()
    }
}
