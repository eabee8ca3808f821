//! # Subsystem Instances
//!
//! Owns one instance of each subsystem. The container is never shared
//! directly; `FundNode` holds it behind its lock.

use crate::adapters::TokenLedgerMinter;
use crate::container::NodeConfig;
use lf_01_token_ledger::{InMemoryBalanceStore, TokenLedger};
use lf_02_case_registry::{CaseRegistry, InMemoryCaseStore};
use lf_03_investment_pool::{
    InMemoryInvestmentStore, InMemoryPoolStore, InvestmentPool, InvestmentPoolApi,
};
use shared_types::{Amount, CaseId, InvestmentId, LedgerError, Principal, Timestamp};

/// Concrete Token Ledger type used by the node.
pub type NodeTokenLedger = TokenLedger<InMemoryBalanceStore>;
/// Concrete Case Registry type used by the node.
pub type NodeCaseRegistry = CaseRegistry<InMemoryCaseStore>;
/// Concrete Investment Pool type used by the node.
pub type NodeInvestmentPool = InvestmentPool<InMemoryPoolStore, InMemoryInvestmentStore>;

/// All subsystem state of one node.
#[derive(Debug)]
pub struct SubsystemContainer {
    /// Subsystem 1.
    pub token_ledger: NodeTokenLedger,
    /// Subsystem 2.
    pub case_registry: NodeCaseRegistry,
    /// Subsystem 3.
    pub investment_pool: NodeInvestmentPool,
}

impl SubsystemContainer {
    /// Builds empty subsystems in dependency order.
    pub fn new(config: &NodeConfig) -> Self {
        let administrator = config.administrator();
        Self {
            token_ledger: TokenLedger::in_memory(),
            case_registry: CaseRegistry::in_memory(administrator.clone()),
            investment_pool: InvestmentPool::in_memory(administrator),
        }
    }

    /// Runs a contribution with the ledger wired in as the pool's minter.
    pub fn invest(
        &mut self,
        case_id: CaseId,
        amount: Amount,
        caller: &Principal,
        now: Timestamp,
    ) -> Result<InvestmentId, LedgerError> {
        let mut minter = TokenLedgerMinter::new(&mut self.token_ledger);
        self.investment_pool
            .invest(case_id, amount, caller, now, &mut minter)
    }
}
