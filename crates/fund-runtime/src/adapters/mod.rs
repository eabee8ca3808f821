//! # Adapters
//!
//! Implementations of subsystem outbound ports in terms of other subsystems.
//!
//! | Adapter | Port | Backed by |
//! |---------|------|-----------|
//! | `TokenLedgerMinter` | lf-03 `TokenMinter` | lf-01 `TokenLedger` |

pub mod token_minter;

pub use token_minter::TokenLedgerMinter;
