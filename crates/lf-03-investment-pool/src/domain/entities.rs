//! Core domain entities for the Investment Pool subsystem.

pub use shared_types::{Amount, CaseId, InvestmentId, Principal, Timestamp};
use serde::{Deserialize, Serialize};

/// Per-case pool accounting.
///
/// A case without a stored pool reads as `CaseInvestmentPool::default()`:
/// zero totals, closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseInvestmentPool {
    /// Cumulative amount contributed.
    pub total_invested: Amount,
    /// Cumulative tokens minted against this pool.
    pub total_tokens: Amount,
    /// Whether new contributions are accepted.
    pub is_open: bool,
}

impl CaseInvestmentPool {
    /// Returns true before the first contribution.
    pub fn is_unfunded(&self) -> bool {
        self.total_invested == 0
    }

    /// INVARIANT-1 holds.
    pub fn is_consistent(&self) -> bool {
        (self.total_invested == 0) == (self.total_tokens == 0)
    }
}

/// An accepted contribution. Immutable once logged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investment {
    pub investment_id: InvestmentId,
    pub investor: Principal,
    pub case_id: CaseId,
    pub amount: Amount,
    pub tokens_issued: Amount,
    pub investment_date: Timestamp,
}
