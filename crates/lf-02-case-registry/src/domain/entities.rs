//! Core domain entities for the Case Registry subsystem.

pub use shared_types::{CaseId, CaseStatus, Principal, Timestamp};
use serde::{Deserialize, Serialize};

/// The caller-supplied fields of a new case.
///
/// The plaintiff is not part of the filing: it is always the caller that
/// submits it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFiling {
    /// Unique case identifier.
    pub case_id: CaseId,
    /// Identity of the defending party.
    pub defendant: Principal,
    /// Court jurisdiction, free text.
    pub jurisdiction: String,
    /// Case description, free text.
    pub details: String,
    /// Filing timestamp supplied by the plaintiff.
    pub filing_date: Timestamp,
}

/// A registered case.
///
/// INVARIANT-2: `status` changes at most once, away from `Pending`.
/// INVARIANT-3: `verifier.is_some() == status.is_resolved()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub case_id: CaseId,
    /// Caller that registered the case. Fixed at creation.
    pub plaintiff: Principal,
    pub defendant: Principal,
    pub jurisdiction: String,
    pub details: String,
    pub filing_date: Timestamp,
    pub status: CaseStatus,
    /// Administrator that resolved the case. `None` while pending.
    pub verifier: Option<Principal>,
}

impl Case {
    /// Creates a pending case filed by `plaintiff`.
    pub fn file(filing: CaseFiling, plaintiff: Principal) -> Self {
        Self {
            case_id: filing.case_id,
            plaintiff,
            defendant: filing.defendant,
            jurisdiction: filing.jurisdiction,
            details: filing.details,
            filing_date: filing.filing_date,
            status: CaseStatus::Pending,
            verifier: None,
        }
    }

    /// Returns true while the case awaits a decision.
    pub fn is_pending(&self) -> bool {
        !self.status.is_resolved()
    }

    /// Applies a terminal decision.
    ///
    /// # Errors
    /// Returns the current status if the case is already resolved.
    pub fn resolve(
        &mut self,
        resolution: Resolution,
        verifier: Principal,
    ) -> Result<(), CaseStatus> {
        if !self.is_pending() {
            return Err(self.status);
        }
        self.status = resolution.status();
        self.verifier = Some(verifier);
        Ok(())
    }
}

/// Administrator decision on a pending case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    Verify,
    Reject,
}

impl Resolution {
    /// The terminal status this decision produces.
    pub fn status(self) -> CaseStatus {
        match self {
            Self::Verify => CaseStatus::Verified,
            Self::Reject => CaseStatus::Rejected,
        }
    }
}
