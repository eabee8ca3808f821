//! # Domain Layer - Token Ledger Subsystem
//!
//! - `ledger`: TokenLedger, the mint-only balance book

pub mod ledger;

pub use ledger::*;
