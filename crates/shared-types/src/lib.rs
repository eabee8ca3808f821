//! # Shared Types Crate
//!
//! This crate contains the identity, identifier and error types used by every
//! Litigation-Fund subsystem, plus the `CallEnvelope<T>` that carries a
//! caller's identity across the dispatch boundary.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Opaque Identity**: A `Principal` is only ever compared, never parsed.
//! - **Envelope Authority**: The envelope's `caller` is the only identity a
//!   subsystem may act on; payloads carry no redundant identity fields.

pub mod entities;
pub mod envelope;
pub mod errors;
pub mod security;

pub use entities::*;
pub use envelope::CallEnvelope;
pub use errors::*;
pub use security::Administrator;
