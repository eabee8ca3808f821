//! # Inbound Port - CaseRegistryApi
//!
//! Primary driving port for case registration and resolution.
//!
//! ## Authorization
//!
//! | Method | Authorized Caller |
//! |--------|-------------------|
//! | `register_case` | Anyone (caller becomes the plaintiff) |
//! | `verify_case` | Administrator |
//! | `reject_case` | Administrator |
//! | `get_case` | Anyone |

use crate::domain::{Case, CaseFiling};
use shared_types::{CaseId, LedgerError, Principal};

/// Primary API for the Case Registry subsystem.
pub trait CaseRegistryApi {
    /// Registers a new pending case with `caller` as plaintiff.
    ///
    /// # Errors
    /// - `AlreadyExists`: the case id is taken
    fn register_case(&mut self, filing: CaseFiling, caller: &Principal) -> Result<(), LedgerError>;

    /// Marks a pending case as verified.
    ///
    /// # Errors
    /// - `NotFound`: unknown case id
    /// - `Unauthorized`: caller is not the administrator
    /// - `InvalidState`: case already resolved
    fn verify_case(&mut self, case_id: CaseId, caller: &Principal) -> Result<(), LedgerError>;

    /// Marks a pending case as rejected.
    ///
    /// # Errors
    /// Same as [`CaseRegistryApi::verify_case`].
    fn reject_case(&mut self, case_id: CaseId, caller: &Principal) -> Result<(), LedgerError>;

    /// Returns a copy of the case record, if registered.
    fn get_case(&self, case_id: CaseId) -> Option<Case>;

    /// Number of registered cases.
    fn case_count(&self) -> usize;
}
