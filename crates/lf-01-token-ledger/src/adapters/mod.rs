//! Adapters for the Token Ledger subsystem.

pub mod memory;

pub use memory::*;
