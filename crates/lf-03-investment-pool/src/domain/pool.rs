//! # Investment Pool
//!
//! Per-case pool gate and the contribution commit.
//!
//! ## Commit Order
//!
//! `invest()` evaluates every guard and every checked addition before it
//! writes. The only fallible write, the token mint, goes first and writes
//! nothing on failure; the log append and pool update that follow cannot
//! fail.
//!
//! ```text
//! guards ─→ tokens_to_mint ─→ checked totals ─→ reserve id
//!        ─→ mint ─→ append record ─→ store pool
//! ```

use super::entities::{Amount, CaseId, CaseInvestmentPool, Investment, InvestmentId};
use super::log::InvestmentLog;
use super::minting::tokens_to_mint;
use crate::adapters::{InMemoryInvestmentStore, InMemoryPoolStore};
use crate::ports::{InvestmentPoolApi, InvestmentStore, PoolStore, TokenMinter};
use shared_types::{Administrator, LedgerError, Principal, Timestamp};
use tracing::{debug, info};

/// Per-case investment pools plus the investment log.
#[derive(Debug)]
pub struct InvestmentPool<P = InMemoryPoolStore, L = InMemoryInvestmentStore>
where
    P: PoolStore,
    L: InvestmentStore,
{
    /// Identity allowed to open and close pools.
    administrator: Administrator,
    /// Pool table.
    pools: P,
    /// Investment records and the id counter.
    log: InvestmentLog<L>,
}

impl InvestmentPool<InMemoryPoolStore, InMemoryInvestmentStore> {
    /// Creates an empty pool set backed by memory.
    pub fn in_memory(administrator: Administrator) -> Self {
        Self::new(
            administrator,
            InMemoryPoolStore::new(),
            InMemoryInvestmentStore::new(),
        )
    }
}

impl<P: PoolStore, L: InvestmentStore> InvestmentPool<P, L> {
    /// Creates a pool set over empty stores.
    pub fn new(administrator: Administrator, pools: P, investments: L) -> Self {
        Self {
            administrator,
            pools,
            log: InvestmentLog::new(investments),
        }
    }

    /// Returns the investment log.
    pub fn log(&self) -> &InvestmentLog<L> {
        &self.log
    }

    /// Sets the gate after the shared authorization guard.
    fn set_gate(
        &mut self,
        case_id: CaseId,
        caller: &Principal,
        is_open: bool,
    ) -> Result<(), LedgerError> {
        self.administrator.authorize(caller)?;

        let mut pool = self.pools.get_pool(case_id).unwrap_or_default();
        pool.is_open = is_open;
        self.pools.put_pool(case_id, pool);

        info!(
            case_id,
            is_open,
            total_invested = pool.total_invested,
            total_tokens = pool.total_tokens,
            "Investment pool gate updated"
        );
        Ok(())
    }
}

impl<P: PoolStore, L: InvestmentStore> InvestmentPoolApi for InvestmentPool<P, L> {
    fn open_case_for_investment(
        &mut self,
        case_id: CaseId,
        caller: &Principal,
    ) -> Result<(), LedgerError> {
        self.set_gate(case_id, caller, true)
    }

    fn close_case_for_investment(
        &mut self,
        case_id: CaseId,
        caller: &Principal,
    ) -> Result<(), LedgerError> {
        self.set_gate(case_id, caller, false)
    }

    fn invest(
        &mut self,
        case_id: CaseId,
        amount: Amount,
        caller: &Principal,
        now: Timestamp,
        minter: &mut dyn TokenMinter,
    ) -> Result<InvestmentId, LedgerError> {
        let pool = self.pools.get_pool(case_id).unwrap_or_default();

        if !pool.is_open {
            return Err(LedgerError::PoolClosed { case_id });
        }
        if amount == 0 {
            return Err(LedgerError::InvalidAmount { amount });
        }

        let tokens = tokens_to_mint(amount, &pool)?;
        debug!(
            case_id,
            amount,
            tokens,
            total_invested = pool.total_invested,
            total_tokens = pool.total_tokens,
            "Computed pro-rata mint"
        );

        let updated = CaseInvestmentPool {
            total_invested: pool.total_invested.checked_add(amount).ok_or(
                LedgerError::ArithmeticOverflow {
                    context: "pool total invested",
                },
            )?,
            total_tokens: pool.total_tokens.checked_add(tokens).ok_or(
                LedgerError::ArithmeticOverflow {
                    context: "pool total tokens",
                },
            )?,
            is_open: pool.is_open,
        };
        let investment_id = self.log.reserve_id()?;

        minter.mint(caller, tokens)?;
        self.log.append(Investment {
            investment_id,
            investor: caller.clone(),
            case_id,
            amount,
            tokens_issued: tokens,
            investment_date: now,
        });
        self.pools.put_pool(case_id, updated);

        info!(
            investment_id,
            case_id,
            investor = %caller,
            amount,
            tokens_issued = tokens,
            "Investment recorded"
        );
        Ok(investment_id)
    }

    fn get_investment(&self, investment_id: InvestmentId) -> Option<Investment> {
        self.log.get(investment_id)
    }

    fn get_case_investment_data(&self, case_id: CaseId) -> CaseInvestmentPool {
        self.pools.get_pool(case_id).unwrap_or_default()
    }

    fn get_case_investments(&self, case_id: CaseId) -> Vec<Investment> {
        self.log.for_case(case_id)
    }

    fn investment_count(&self) -> usize {
        self.log.len()
    }
}
