//! # Fund Node
//!
//! Single-writer facade over the subsystem container.
//!
//! Each operation takes the container lock for its full duration, evaluates
//! its guards, and commits before releasing it. Reads take the same lock, so
//! they never interleave with a half-applied write.

use crate::container::{ConfigError, NodeConfig, SubsystemContainer};
use lf_01_token_ledger::TokenLedgerApi;
use lf_02_case_registry::{Case, CaseFiling, CaseRegistryApi};
use lf_03_investment_pool::{
    CaseInvestmentPool, Investment, InvestmentPoolApi, SystemTimeSource, TimeSource,
};
use parking_lot::Mutex;
use shared_types::{Amount, CaseId, InvestmentId, LedgerError, Principal};
use tracing::info;

/// A running Litigation-Fund node.
pub struct FundNode<T: TimeSource = SystemTimeSource> {
    subsystems: Mutex<SubsystemContainer>,
    time_source: T,
}

impl<T: TimeSource> FundNode<T> {
    /// Validates `config` and builds a node with empty state.
    pub fn start(config: NodeConfig, time_source: T) -> Result<Self, ConfigError> {
        config.validate()?;

        let subsystems = SubsystemContainer::new(&config);
        info!(administrator = %config.administrator, "Fund node started");

        Ok(Self {
            subsystems: Mutex::new(subsystems),
            time_source,
        })
    }

    /// Returns the node's time source.
    pub fn time_source(&self) -> &T {
        &self.time_source
    }

    // =========================================================================
    // CASE REGISTRY (Subsystem 2)
    // =========================================================================

    /// Registers a case filed by `caller`.
    pub fn register_case(
        &self,
        filing: CaseFiling,
        caller: &Principal,
    ) -> Result<(), LedgerError> {
        self.subsystems
            .lock()
            .case_registry
            .register_case(filing, caller)
    }

    /// Verifies a pending case. Administrator only.
    pub fn verify_case(&self, case_id: CaseId, caller: &Principal) -> Result<(), LedgerError> {
        self.subsystems
            .lock()
            .case_registry
            .verify_case(case_id, caller)
    }

    /// Rejects a pending case. Administrator only.
    pub fn reject_case(&self, case_id: CaseId, caller: &Principal) -> Result<(), LedgerError> {
        self.subsystems
            .lock()
            .case_registry
            .reject_case(case_id, caller)
    }

    pub fn get_case(&self, case_id: CaseId) -> Option<Case> {
        self.subsystems.lock().case_registry.get_case(case_id)
    }

    // =========================================================================
    // INVESTMENT POOL (Subsystem 3)
    // =========================================================================

    /// Opens the pool for a case. Administrator only.
    pub fn open_case_for_investment(
        &self,
        case_id: CaseId,
        caller: &Principal,
    ) -> Result<(), LedgerError> {
        self.subsystems
            .lock()
            .investment_pool
            .open_case_for_investment(case_id, caller)
    }

    /// Closes the pool for a case. Administrator only.
    pub fn close_case_for_investment(
        &self,
        case_id: CaseId,
        caller: &Principal,
    ) -> Result<(), LedgerError> {
        self.subsystems
            .lock()
            .investment_pool
            .close_case_for_investment(case_id, caller)
    }

    /// Contributes `amount` to a case pool and mints the investor's tokens.
    pub fn invest(
        &self,
        case_id: CaseId,
        amount: Amount,
        caller: &Principal,
    ) -> Result<InvestmentId, LedgerError> {
        let mut subsystems = self.subsystems.lock();
        let now = self.time_source.now();
        subsystems.invest(case_id, amount, caller, now)
    }

    pub fn get_investment(&self, investment_id: InvestmentId) -> Option<Investment> {
        self.subsystems
            .lock()
            .investment_pool
            .get_investment(investment_id)
    }

    pub fn get_case_investment_data(&self, case_id: CaseId) -> CaseInvestmentPool {
        self.subsystems
            .lock()
            .investment_pool
            .get_case_investment_data(case_id)
    }

    pub fn get_case_investments(&self, case_id: CaseId) -> Vec<Investment> {
        self.subsystems
            .lock()
            .investment_pool
            .get_case_investments(case_id)
    }

    // =========================================================================
    // TOKEN LEDGER (Subsystem 1)
    // =========================================================================

    pub fn balance_of(&self, investor: &Principal) -> Amount {
        self.subsystems.lock().token_ledger.balance_of(investor)
    }

    pub fn total_supply(&self) -> Amount {
        self.subsystems.lock().token_ledger.total_supply()
    }
}
