use crate::domain::Case;
use crate::ports::CaseStore;
use shared_types::CaseId;
use std::collections::HashMap;

/// In-memory implementation of CaseStore
#[derive(Debug, Default)]
pub struct InMemoryCaseStore {
    cases: HashMap<CaseId, Case>,
}

impl InMemoryCaseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CaseStore for InMemoryCaseStore {
    fn get_case(&self, case_id: CaseId) -> Option<&Case> {
        self.cases.get(&case_id)
    }

    fn put_case(&mut self, case: Case) {
        self.cases.insert(case.case_id, case);
    }

    fn case_count(&self) -> usize {
        self.cases.len()
    }
}
