use crate::domain::{CaseInvestmentPool, Investment};
use crate::ports::{InvestmentStore, PoolStore};
use shared_types::{CaseId, InvestmentId};
use std::collections::{BTreeMap, HashMap};

/// In-memory implementation of PoolStore
#[derive(Debug, Default)]
pub struct InMemoryPoolStore {
    pools: HashMap<CaseId, CaseInvestmentPool>,
}

impl InMemoryPoolStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PoolStore for InMemoryPoolStore {
    fn get_pool(&self, case_id: CaseId) -> Option<CaseInvestmentPool> {
        self.pools.get(&case_id).copied()
    }

    fn put_pool(&mut self, case_id: CaseId, pool: CaseInvestmentPool) {
        self.pools.insert(case_id, pool);
    }

    fn pool_count(&self) -> usize {
        self.pools.len()
    }
}

/// In-memory implementation of InvestmentStore
///
/// Ordered by id so per-case listings come back in commit order.
#[derive(Debug, Default)]
pub struct InMemoryInvestmentStore {
    investments: BTreeMap<InvestmentId, Investment>,
}

impl InMemoryInvestmentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InvestmentStore for InMemoryInvestmentStore {
    fn get_investment(&self, investment_id: InvestmentId) -> Option<&Investment> {
        self.investments.get(&investment_id)
    }

    fn insert_investment(&mut self, investment: Investment) {
        self.investments.insert(investment.investment_id, investment);
    }

    fn investments_for_case(&self, case_id: CaseId) -> Vec<Investment> {
        self.investments
            .values()
            .filter(|i| i.case_id == case_id)
            .cloned()
            .collect()
    }

    fn investment_count(&self) -> usize {
        self.investments.len()
    }
}
