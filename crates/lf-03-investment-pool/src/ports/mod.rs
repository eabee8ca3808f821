//! Ports layer for the Investment Pool subsystem.
//!
//! - Inbound (Driving) ports: API exposed to the runtime
//! - Outbound (Driven) ports: pool and investment tables, token minting, time

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
