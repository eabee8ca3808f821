//! # Inbound Port - InvestmentPoolApi
//!
//! Primary driving port for pool gating and contributions.
//!
//! ## Authorization
//!
//! | Method | Authorized Caller |
//! |--------|-------------------|
//! | `open_case_for_investment` | Administrator |
//! | `close_case_for_investment` | Administrator |
//! | `invest` | Anyone (caller becomes the investor) |
//! | reads | Anyone |

use crate::domain::{CaseInvestmentPool, Investment};
use crate::ports::TokenMinter;
use shared_types::{Amount, CaseId, InvestmentId, LedgerError, Principal, Timestamp};

/// Primary API for the Investment Pool subsystem.
pub trait InvestmentPoolApi {
    /// Opens the pool for `case_id`, creating it with zero totals if absent.
    /// Opening an open pool is a no-op.
    ///
    /// # Errors
    /// - `Unauthorized`: caller is not the administrator
    fn open_case_for_investment(
        &mut self,
        case_id: CaseId,
        caller: &Principal,
    ) -> Result<(), LedgerError>;

    /// Closes the pool for `case_id`, keeping its totals. Closing a pool that
    /// was never opened stores a zeroed closed pool.
    ///
    /// # Errors
    /// - `Unauthorized`: caller is not the administrator
    fn close_case_for_investment(
        &mut self,
        case_id: CaseId,
        caller: &Principal,
    ) -> Result<(), LedgerError>;

    /// Contributes `amount` to the pool on behalf of `caller`, minting the
    /// pro-rata token share through `minter`.
    ///
    /// Returns the new investment id. Either the log, the pool totals and the
    /// minted balance all change, or none of them does.
    ///
    /// # Errors
    /// - `PoolClosed`: pool closed or never opened
    /// - `InvalidAmount`: `amount` is zero
    /// - `ArithmeticOverflow`: a total, balance or the id counter would overflow
    fn invest(
        &mut self,
        case_id: CaseId,
        amount: Amount,
        caller: &Principal,
        now: Timestamp,
        minter: &mut dyn TokenMinter,
    ) -> Result<InvestmentId, LedgerError>;

    /// Returns a copy of the investment record, if logged.
    fn get_investment(&self, investment_id: InvestmentId) -> Option<Investment>;

    /// Returns the pool for `case_id`, or the zeroed closed default.
    fn get_case_investment_data(&self, case_id: CaseId) -> CaseInvestmentPool;

    /// Returns all investments into `case_id`, in id order.
    fn get_case_investments(&self, case_id: CaseId) -> Vec<Investment>;

    /// Number of logged investments across all pools.
    fn investment_count(&self) -> usize;
}
