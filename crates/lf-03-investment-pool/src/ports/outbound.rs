//! Outbound (Driven) ports for the Investment Pool subsystem.
//!
//! These traits define the tables the pool owns and the collaborators it
//! calls during a contribution commit.

use crate::domain::{CaseInvestmentPool, Investment};
use shared_types::{Amount, CaseId, InvestmentId, LedgerError, Principal, Timestamp};

/// Pool table abstraction, keyed by case id.
pub trait PoolStore: Send + Sync {
    /// Returns the stored pool, or `None` if never opened or closed.
    fn get_pool(&self, case_id: CaseId) -> Option<CaseInvestmentPool>;

    /// Inserts or replaces the pool for `case_id`.
    fn put_pool(&mut self, case_id: CaseId, pool: CaseInvestmentPool);

    /// Number of stored pools.
    fn pool_count(&self) -> usize;
}

/// Investment table abstraction, keyed by investment id.
///
/// Append-only: there is no update or delete.
pub trait InvestmentStore: Send + Sync {
    /// Returns the investment record, if logged.
    fn get_investment(&self, investment_id: InvestmentId) -> Option<&Investment>;

    /// Stores a new record under `investment.investment_id`.
    fn insert_investment(&mut self, investment: Investment);

    /// Returns every record for `case_id`, in id order.
    fn investments_for_case(&self, case_id: CaseId) -> Vec<Investment>;

    /// Number of logged investments.
    fn investment_count(&self) -> usize;
}

/// Token minting interface for crediting investors.
///
/// Implemented over the Token Ledger (Subsystem 1) by the runtime.
pub trait TokenMinter {
    /// Credits `amount` tokens to `investor` and returns the new balance.
    ///
    /// # Errors
    /// Implementations must write nothing when they return an error.
    fn mint(&mut self, investor: &Principal, amount: Amount) -> Result<Amount, LedgerError>;
}

/// Time source for stamping investments.
///
/// Abstracted to allow testing with deterministic time.
pub trait TimeSource: Send + Sync {
    /// Returns the current time in seconds since the UNIX epoch.
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Manually driven time source for tests and replays.
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    time: std::sync::atomic::AtomicU64,
}

impl ManualTimeSource {
    pub fn new(initial: Timestamp) -> Self {
        Self {
            time: std::sync::atomic::AtomicU64::new(initial),
        }
    }

    pub fn advance(&self, secs: u64) {
        self.time.fetch_add(secs, std::sync::atomic::Ordering::SeqCst);
    }

    pub fn set(&self, time: Timestamp) {
        self.time.store(time, std::sync::atomic::Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Timestamp {
        self.time.load(std::sync::atomic::Ordering::SeqCst)
    }
}

/// Mock token minter for testing.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockTokenMinter {
    pub balances: std::collections::HashMap<Principal, Amount>,
    pub fail: bool,
}

#[cfg(test)]
impl MockTokenMinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn balance(&self, investor: &str) -> Amount {
        self.balances
            .get(&Principal::from(investor))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
impl TokenMinter for MockTokenMinter {
    fn mint(&mut self, investor: &Principal, amount: Amount) -> Result<Amount, LedgerError> {
        if self.fail {
            return Err(LedgerError::ArithmeticOverflow {
                context: "investor token balance",
            });
        }
        let balance = self.balances.entry(investor.clone()).or_insert(0);
        *balance += amount;
        Ok(*balance)
    }
}
