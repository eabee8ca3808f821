//! # Case Registry
//!
//! Case table plus the verification state machine.
//!
//! ## Invariants Enforced
//!
//! - INVARIANT-1: No duplicate case ids (checked in `register_case()`)
//! - INVARIANT-2: Single transition out of `Pending` (checked in `resolve()`)
//! - INVARIANT-4: Administrator-only resolution (checked in `resolve()`)
//!
//! All guards run before the store is touched.

use super::entities::{Case, CaseFiling, Resolution};
use crate::adapters::InMemoryCaseStore;
use crate::ports::{CaseRegistryApi, CaseStore};
use shared_types::{Administrator, CaseId, LedgerError, Principal};
use tracing::info;

/// Registry of filed cases.
#[derive(Debug)]
pub struct CaseRegistry<S: CaseStore = InMemoryCaseStore> {
    /// Identity allowed to resolve cases.
    administrator: Administrator,
    /// Case table.
    store: S,
}

impl CaseRegistry<InMemoryCaseStore> {
    /// Creates an empty registry backed by memory.
    pub fn in_memory(administrator: Administrator) -> Self {
        Self::new(administrator, InMemoryCaseStore::new())
    }
}

impl<S: CaseStore> CaseRegistry<S> {
    /// Creates a registry over an empty case store.
    pub fn new(administrator: Administrator, store: S) -> Self {
        Self {
            administrator,
            store,
        }
    }

    /// Transition guard shared by verify and reject.
    fn resolve(
        &mut self,
        case_id: CaseId,
        caller: &Principal,
        resolution: Resolution,
    ) -> Result<(), LedgerError> {
        let mut case = self
            .store
            .get_case(case_id)
            .cloned()
            .ok_or(LedgerError::NotFound { case_id })?;

        self.administrator.authorize(caller)?;

        case.resolve(resolution, caller.clone())
            .map_err(|status| LedgerError::InvalidState { case_id, status })?;

        let status = case.status;
        self.store.put_case(case);

        info!(case_id, status = %status, verifier = %caller, "Case resolved");
        Ok(())
    }
}

impl<S: CaseStore> CaseRegistryApi for CaseRegistry<S> {
    fn register_case(&mut self, filing: CaseFiling, caller: &Principal) -> Result<(), LedgerError> {
        let case_id = filing.case_id;
        if self.store.contains_case(case_id) {
            return Err(LedgerError::AlreadyExists { case_id });
        }

        self.store.put_case(Case::file(filing, caller.clone()));

        info!(case_id, plaintiff = %caller, "Case registered");
        Ok(())
    }

    fn verify_case(&mut self, case_id: CaseId, caller: &Principal) -> Result<(), LedgerError> {
        self.resolve(case_id, caller, Resolution::Verify)
    }

    fn reject_case(&mut self, case_id: CaseId, caller: &Principal) -> Result<(), LedgerError> {
        self.resolve(case_id, caller, Resolution::Reject)
    }

    fn get_case(&self, case_id: CaseId) -> Option<Case> {
        self.store.get_case(case_id).cloned()
    }

    fn case_count(&self) -> usize {
        self.store.case_count()
    }
}
