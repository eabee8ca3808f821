//! # Token Ledger Subsystem
//!
//! **Subsystem ID:** 1
//!
//! ## Purpose
//!
//! Holds per-investor balances of the claim tokens minted by the Investment
//! Pool (Subsystem 3). Tokens are mint-only: there is no transfer or burn, so
//! every balance and the total supply are monotonically non-decreasing.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Balances never decrease | `domain/ledger.rs` - only `mint()` writes |
//! | INVARIANT-2 | Total supply equals the sum of balances | `domain/ledger.rs` - `mint()` updates both |
//! | INVARIANT-3 | Overflowing mints write nothing | `domain/ledger.rs` - checked before store |
//!
//! ## Callers
//!
//! | Method | Caller |
//! |--------|--------|
//! | `mint` | Investment Pool (3), via the runtime's `TokenLedgerMinter` adapter |
//! | `balance_of` | Anyone |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! adapters/        - InMemoryBalanceStore
//! ports/inbound.rs  - TokenLedgerApi trait
//! ports/outbound.rs - BalanceStore trait
//! domain/ledger.rs  - TokenLedger
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
