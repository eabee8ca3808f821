//! # Subsystem Container
//!
//! Node configuration and ownership of every subsystem instance.

pub mod config;
pub mod subsystems;

pub use config::{ConfigError, LogConfig, NodeConfig};
pub use subsystems::SubsystemContainer;
