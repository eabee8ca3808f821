//! # Error Types
//!
//! Defines the error type shared by every Litigation-Fund subsystem.
//!
//! Every guard runs before any mutation, so an operation that returns one of
//! these errors has left state exactly as it found it. None of them is fatal.

use crate::entities::{Amount, CaseId, CaseStatus, Principal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by case registry and investment pool operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A case with this identifier is already registered.
    #[error("Case {case_id} already exists")]
    AlreadyExists { case_id: CaseId },

    /// The operation targets an unknown case.
    #[error("Case {case_id} not found")]
    NotFound { case_id: CaseId },

    /// The caller is not the administrator for an admin-gated operation.
    #[error("Unauthorized: {caller} is not the administrator")]
    Unauthorized { caller: Principal },

    /// The case has already been resolved.
    #[error("Case {case_id} is {status}, expected pending")]
    InvalidState { case_id: CaseId, status: CaseStatus },

    /// The pool is closed or was never opened.
    #[error("Investment pool for case {case_id} is closed")]
    PoolClosed { case_id: CaseId },

    /// Contributions must be strictly positive.
    #[error("Invalid investment amount: {amount}")]
    InvalidAmount { amount: Amount },

    /// A counter would leave its representable range.
    #[error("Arithmetic overflow: {context}")]
    ArithmeticOverflow { context: &'static str },
}

impl LedgerError {
    /// Returns the stable discriminant reported across the dispatch boundary.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::InvalidState { .. } => ErrorKind::InvalidState,
            Self::PoolClosed { .. } => ErrorKind::PoolClosed,
            Self::InvalidAmount { .. } => ErrorKind::InvalidAmount,
            Self::ArithmeticOverflow { .. } => ErrorKind::ArithmeticOverflow,
        }
    }
}

/// Payload-free error discriminant for transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    AlreadyExists,
    NotFound,
    Unauthorized,
    InvalidState,
    PoolClosed,
    InvalidAmount,
    ArithmeticOverflow,
}
