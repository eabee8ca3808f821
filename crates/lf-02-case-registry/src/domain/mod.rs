//! # Domain Layer - Case Registry Subsystem
//!
//! ## Components
//!
//! - `entities`: Case record, filing request, resolution decision
//! - `registry`: CaseRegistry with the shared transition guard

pub mod entities;
pub mod registry;

pub use entities::*;
pub use registry::*;
