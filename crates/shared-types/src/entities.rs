//! # Core Domain Entities
//!
//! Identity, identifier and amount types shared by all subsystems.
//!
//! ## Clusters
//!
//! - **Identity**: `Principal`
//! - **Identifiers**: `CaseId`, `InvestmentId`
//! - **Quantities**: `Amount`, `Timestamp`
//! - **Case lifecycle**: `CaseStatus`

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CLUSTER A: IDENTIFIERS & QUANTITIES
// =============================================================================

/// Caller-supplied case identifier. Unique for the lifetime of the system.
pub type CaseId = u64;

/// Sequentially assigned investment identifier, starting at 1.
pub type InvestmentId = u64;

/// Contribution amounts, pool totals and token balances.
pub type Amount = u128;

/// Seconds since the UNIX epoch.
pub type Timestamp = u64;

// =============================================================================
// CLUSTER B: IDENTITY
// =============================================================================

/// An opaque caller identity.
///
/// The core never interprets the contents; two principals are the same caller
/// if and only if their underlying strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Wraps an identity string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identity string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Principal {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// =============================================================================
// CLUSTER C: CASE LIFECYCLE
// =============================================================================

/// Verification status of a case.
///
/// State machine:
/// ```text
/// [Pending] ──verify──→ [Verified]
///     │
///     └──────reject───→ [Rejected]
/// ```
/// Both resolved states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CaseStatus {
    /// Registered, awaiting an administrator decision.
    #[default]
    Pending,
    /// Accepted by the administrator.
    Verified,
    /// Refused by the administrator.
    Rejected,
}

impl CaseStatus {
    /// Returns true once the case has left `Pending`.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        };
        f.write_str(name)
    }
}
