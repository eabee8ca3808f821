//! Ports layer for the Case Registry subsystem.
//!
//! - Inbound (Driving) ports: API exposed to the runtime
//! - Outbound (Driven) ports: case table storage

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
