//! Adapters for the Case Registry subsystem.

pub mod memory;

pub use memory::*;
