//! Token Minter Adapter
//!
//! Connects the Investment Pool's `TokenMinter` port to the Token Ledger.
//! The adapter borrows the ledger for a single commit only.

use lf_01_token_ledger::{BalanceStore, TokenLedger};
use lf_03_investment_pool::TokenMinter;
use shared_types::{Amount, LedgerError, Principal};

/// Credits minted tokens to a `TokenLedger`.
pub struct TokenLedgerMinter<'a, S: BalanceStore> {
    ledger: &'a mut TokenLedger<S>,
}

impl<'a, S: BalanceStore> TokenLedgerMinter<'a, S> {
    pub fn new(ledger: &'a mut TokenLedger<S>) -> Self {
        Self { ledger }
    }
}

impl<S: BalanceStore> TokenMinter for TokenLedgerMinter<'_, S> {
    fn mint(&mut self, investor: &Principal, amount: Amount) -> Result<Amount, LedgerError> {
        self.ledger.mint(investor, amount)
    }
}
