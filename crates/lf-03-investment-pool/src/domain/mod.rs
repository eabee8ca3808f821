//! # Domain Layer - Investment Pool Subsystem
//!
//! ## Components
//!
//! - `entities`: CaseInvestmentPool, Investment
//! - `minting`: pro-rata token calculation
//! - `log`: append-only InvestmentLog
//! - `pool`: InvestmentPool lifecycle gate and contribution commit

pub mod entities;
pub mod log;
pub mod minting;
pub mod pool;

pub use entities::*;
pub use log::*;
pub use minting::*;
pub use pool::*;
