//! Ports layer for the Token Ledger subsystem.
//!
//! - Inbound (Driving) ports: API exposed to the runtime
//! - Outbound (Driven) ports: balance table storage

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
