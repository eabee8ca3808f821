//! # Case Registry Subsystem
//!
//! **Subsystem ID:** 2
//!
//! ## Purpose
//!
//! Owns the case records filed by plaintiffs and drives each case through the
//! administrator's verification decision.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Case ids are unique for the system lifetime | `domain/registry.rs` - `register_case()` check |
//! | INVARIANT-2 | Status leaves `Pending` exactly once | `domain/registry.rs` - `resolve()` guard |
//! | INVARIANT-3 | `verifier` is set iff status is not `Pending` | `domain/entities.rs` - `Case::resolve()` |
//! | INVARIANT-4 | Only the administrator resolves cases | `domain/registry.rs` - `resolve()` guard |
//!
//! ## Verification State Machine
//!
//! ```text
//! [Pending] ──verify_case──→ [Verified]
//!     │
//!     └─────reject_case───→ [Rejected]
//! ```
//!
//! Both transitions share one guard, evaluated in order:
//!
//! | Check | Error |
//! |-------|-------|
//! | Case exists | `NotFound` |
//! | Caller is the administrator | `Unauthorized` |
//! | Status is `Pending` | `InvalidState` |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! adapters/          - InMemoryCaseStore
//! ports/inbound.rs   - CaseRegistryApi trait
//! ports/outbound.rs  - CaseStore trait
//! domain/entities.rs - Case, CaseFiling, Resolution
//! domain/registry.rs - CaseRegistry
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
