//! # Investment Pool Subsystem
//!
//! **Subsystem ID:** 3
//!
//! ## Purpose
//!
//! Accepts contributions into per-case pools and mints claim tokens for each
//! contribution at the pool's current price per token. Every accepted
//! contribution is appended to the investment log under a sequential id.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | `total_invested == 0` iff `total_tokens == 0` | `domain/minting.rs` - 1:1 bootstrap |
//! | INVARIANT-2 | Pool totals never decrease | `domain/pool.rs` - only `invest()` adds |
//! | INVARIANT-3 | Totals equal the sums over the pool's investments | `domain/pool.rs` - single commit |
//! | INVARIANT-4 | Investment ids start at 1 and are never reused | `domain/log.rs` - owned counter |
//! | INVARIANT-5 | No investment into a closed or unopened pool | `domain/pool.rs` - `invest()` guard |
//!
//! ## Minting
//!
//! ```text
//! tokens = amount                                  if total_invested == 0
//! tokens = floor(amount * total_tokens / total_invested)  otherwise
//! ```
//!
//! The product is formed in 256 bits so it cannot overflow before the divide.
//!
//! ## Pool Gate
//!
//! The open/closed gate is an administrator action independent of the case's
//! verification status. A pool that was never opened behaves as closed.
//!
//! ## Outbound Dependencies
//!
//! | Subsystem | Trait | Purpose |
//! |-----------|-------|---------|
//! | 1 (Token Ledger) | `TokenMinter` | Credit minted tokens to the investor |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! adapters/           - InMemoryPoolStore, InMemoryInvestmentStore
//! ports/inbound.rs    - InvestmentPoolApi trait
//! ports/outbound.rs   - PoolStore, InvestmentStore, TokenMinter, TimeSource
//! domain/entities.rs  - CaseInvestmentPool, Investment
//! domain/minting.rs   - pro-rata token calculation
//! domain/log.rs       - InvestmentLog with the id counter
//! domain/pool.rs      - InvestmentPool
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
