//! Adapters for the Investment Pool subsystem.

pub mod memory;

pub use memory::*;
