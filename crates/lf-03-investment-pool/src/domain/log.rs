//! # Investment Log
//!
//! Append-only record of accepted contributions. Owns the investment id
//! counter: ids start at 1, advance by one per appended record, and are
//! never reset or reused.

use super::entities::{CaseId, Investment, InvestmentId};
use crate::adapters::InMemoryInvestmentStore;
use crate::ports::InvestmentStore;
use shared_types::LedgerError;

/// First id handed out by a fresh log.
pub const FIRST_INVESTMENT_ID: InvestmentId = 1;

/// Append-only investment record store.
#[derive(Debug)]
pub struct InvestmentLog<S: InvestmentStore = InMemoryInvestmentStore> {
    store: S,
    next_id: InvestmentId,
}

impl Default for InvestmentLog<InMemoryInvestmentStore> {
    fn default() -> Self {
        Self::new(InMemoryInvestmentStore::new())
    }
}

impl<S: InvestmentStore> InvestmentLog<S> {
    /// Creates a log over an empty investment store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            next_id: FIRST_INVESTMENT_ID,
        }
    }

    /// The id the next appended record will receive.
    pub fn next_id(&self) -> InvestmentId {
        self.next_id
    }

    /// Returns the next id if the counter can still advance past it.
    ///
    /// # Errors
    /// - `ArithmeticOverflow` once the id space is exhausted
    pub(crate) fn reserve_id(&self) -> Result<InvestmentId, LedgerError> {
        self.next_id
            .checked_add(1)
            .map(|_| self.next_id)
            .ok_or(LedgerError::ArithmeticOverflow {
                context: "investment id counter",
            })
    }

    /// Appends a record carrying the id from `reserve_id()`.
    pub(crate) fn append(&mut self, investment: Investment) {
        debug_assert_eq!(investment.investment_id, self.next_id);
        self.next_id = investment.investment_id + 1;
        self.store.insert_investment(investment);
    }

    /// Returns a copy of the record, if logged.
    pub fn get(&self, investment_id: InvestmentId) -> Option<Investment> {
        self.store.get_investment(investment_id).cloned()
    }

    /// Returns every record for `case_id`, in id order.
    pub fn for_case(&self, case_id: CaseId) -> Vec<Investment> {
        self.store.investments_for_case(case_id)
    }

    /// Number of logged records.
    pub fn len(&self) -> usize {
        self.store.investment_count()
    }

    /// Returns true if nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
