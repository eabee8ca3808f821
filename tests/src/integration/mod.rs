//! # Integration Test Flows
//!
//! Exercise the case registry, investment pool and token ledger together
//! through the runtime node, the way a transport would drive them.

pub mod acceptance;
pub mod dispatch_flow;
pub mod invariants;
pub mod ledger_wiring;

use fund_runtime::{FundNode, NodeConfig};
use lf_02_case_registry::CaseFiling;
use lf_03_investment_pool::ManualTimeSource;
use shared_types::{CaseId, Principal};

/// Administrator identity used across the suite.
pub const ADMIN: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
/// A non-administrator identity.
pub const OUTSIDER: &str = "ST3NBRSFKX28FQ2ZJ1MAKX58HKHSDGNV5N7R21XCP";
/// Defendant identity in the sample filings.
pub const DEFENDANT: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";
/// Block time used by the sample filings and the node clock.
pub const BLOCK_TIME: u64 = 1_617_235_200;

/// A node with a fixed clock and `ADMIN` as administrator.
pub fn test_node() -> FundNode<ManualTimeSource> {
    FundNode::start(NodeConfig::for_testing(ADMIN), ManualTimeSource::new(BLOCK_TIME))
        .expect("test config is valid")
}

/// A filing against `DEFENDANT`.
pub fn filing(case_id: CaseId, jurisdiction: &str, details: &str) -> CaseFiling {
    CaseFiling {
        case_id,
        defendant: Principal::from(DEFENDANT),
        jurisdiction: jurisdiction.to_string(),
        details: details.to_string(),
        filing_date: BLOCK_TIME,
    }
}

pub fn principal(id: &str) -> Principal {
    Principal::from(id)
}
