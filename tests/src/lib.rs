//! # Litigation-Fund Test Suite
//!
//! Unified test crate.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── acceptance.rs     # Case + pool walkthroughs through FundNode
//!     ├── dispatch_flow.rs  # The same flows as enveloped JSON requests
//!     ├── invariants.rs     # Cross-subsystem properties
//!     └── ledger_wiring.rs  # Token ledger as the pool's minter
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p lf-tests
//! cargo test -p lf-tests integration::acceptance::
//! ```

#![allow(dead_code)]

pub mod integration;
