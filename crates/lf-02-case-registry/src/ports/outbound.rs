//! Outbound (Driven) ports for the Case Registry subsystem.

use crate::domain::Case;
use shared_types::CaseId;

/// Case table abstraction, keyed by case id.
///
/// Owned exclusively by a `CaseRegistry`.
pub trait CaseStore: Send + Sync {
    /// Returns the case record, if registered.
    fn get_case(&self, case_id: CaseId) -> Option<&Case>;

    /// Inserts or replaces the record under `case.case_id`.
    fn put_case(&mut self, case: Case);

    /// Returns true if a case with this id exists.
    fn contains_case(&self, case_id: CaseId) -> bool {
        self.get_case(case_id).is_some()
    }

    /// Number of registered cases.
    fn case_count(&self) -> usize;
}
