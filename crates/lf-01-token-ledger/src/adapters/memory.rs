use crate::ports::BalanceStore;
use shared_types::{Amount, Principal};
use std::collections::HashMap;

/// In-memory implementation of BalanceStore
#[derive(Debug, Default)]
pub struct InMemoryBalanceStore {
    balances: HashMap<Principal, Amount>,
}

impl InMemoryBalanceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BalanceStore for InMemoryBalanceStore {
    fn balance(&self, investor: &Principal) -> Option<Amount> {
        self.balances.get(investor).copied()
    }

    fn put_balance(&mut self, investor: Principal, amount: Amount) {
        self.balances.insert(investor, amount);
    }

    fn holder_count(&self) -> usize {
        self.balances.len()
    }
}
