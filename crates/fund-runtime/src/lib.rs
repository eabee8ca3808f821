//! # Litigation-Fund Runtime
//!
//! Wires the subsystems into one node and exposes them to callers.
//!
//! ## Modular Structure
//!
//! - `container/` - Node configuration and the subsystem container
//! - `adapters/` - Port implementations connecting subsystems
//! - `handlers/` - Request dispatch for enveloped calls
//! - `telemetry` - Logging initialisation
//! - `node` - `FundNode`, the single-writer facade
//!
//! ## Subsystems
//!
//! 1. Token Ledger (lf-01) - Claim token balances
//! 2. Case Registry (lf-02) - Case verification state machine
//! 3. Investment Pool (lf-03) - Pool accounting, minting, investment log
//!
//! ## Execution Model
//!
//! ```text
//! caller ──CallEnvelope<FundRequest>──→ dispatch ──→ FundNode
//!                                                       │ lock
//!                                                       ↓
//!                                          SubsystemContainer
//!                                   ┌───────────┼────────────┐
//!                                   ↓           ↓            ↓
//!                             CaseRegistry  InvestmentPool ─mint→ TokenLedger
//! ```
//!
//! Every operation holds the node lock for its whole duration, so operations
//! apply one at a time and no caller ever observes a partial commit.
//!
//! ## Startup
//!
//! ```rust,ignore
//! let config = NodeConfig::from_env()?;
//! telemetry::init_logging(&config.logging)?;
//! let node = FundNode::start(config, SystemTimeSource)?;
//! ```

pub mod adapters;
pub mod container;
pub mod handlers;
pub mod node;
pub mod telemetry;

pub use container::{ConfigError, LogConfig, NodeConfig, SubsystemContainer};
pub use handlers::{dispatch, FundRequest, FundResponse};
pub use node::FundNode;
pub use telemetry::TelemetryError;
