//! Request dispatch for the Litigation-Fund node.
//!
//! ## Operations
//!
//! | Request | Success response | Error kinds |
//! |---------|------------------|-------------|
//! | `RegisterCase` | `Ok` | AlreadyExists |
//! | `VerifyCase` | `Ok` | NotFound, Unauthorized, InvalidState |
//! | `RejectCase` | `Ok` | NotFound, Unauthorized, InvalidState |
//! | `GetCase` | `Case` | - |
//! | `OpenCaseForInvestment` | `Ok` | Unauthorized |
//! | `CloseCaseForInvestment` | `Ok` | Unauthorized |
//! | `Invest` | `InvestmentId` | PoolClosed, InvalidAmount, ArithmeticOverflow |
//! | `GetInvestment` | `Investment` | - |
//! | `GetCaseInvestmentData` | `Pool` | - |
//! | `GetCaseInvestments` | `Investments` | - |
//! | `BalanceOf` | `Balance` | - |

use crate::node::FundNode;
use lf_02_case_registry::{Case, CaseFiling};
use lf_03_investment_pool::{CaseInvestmentPool, Investment, TimeSource};
use serde::{Deserialize, Serialize};
use shared_types::{
    Amount, CallEnvelope, CaseId, ErrorKind, InvestmentId, LedgerError, Principal,
};
use tracing::{debug, instrument};

/// A call against the node. The caller comes from the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundRequest {
    RegisterCase { filing: CaseFiling },
    VerifyCase { case_id: CaseId },
    RejectCase { case_id: CaseId },
    GetCase { case_id: CaseId },
    OpenCaseForInvestment { case_id: CaseId },
    CloseCaseForInvestment { case_id: CaseId },
    Invest { case_id: CaseId, amount: Amount },
    GetInvestment { investment_id: InvestmentId },
    GetCaseInvestmentData { case_id: CaseId },
    GetCaseInvestments { case_id: CaseId },
    BalanceOf { investor: Principal },
}

/// Result of a dispatched call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundResponse {
    Ok,
    Case(Option<Case>),
    Investment(Option<Investment>),
    Pool(CaseInvestmentPool),
    Investments(Vec<Investment>),
    InvestmentId(InvestmentId),
    Balance(Amount),
    Error { kind: ErrorKind, message: String },
}

impl From<LedgerError> for FundResponse {
    fn from(err: LedgerError) -> Self {
        Self::Error {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl FundResponse {
    /// Returns the error kind if this is an error response.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Error { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

fn unit(result: Result<(), LedgerError>) -> FundResponse {
    match result {
        Ok(()) => FundResponse::Ok,
        Err(err) => err.into(),
    }
}

/// Runs one request as the envelope's caller.
///
/// The response carries the request's correlation id.
#[instrument(
    skip(node, envelope),
    fields(correlation_id = %envelope.correlation_id, caller = %envelope.caller)
)]
pub fn dispatch<T: TimeSource>(
    node: &FundNode<T>,
    envelope: CallEnvelope<FundRequest>,
) -> CallEnvelope<FundResponse> {
    let caller = &envelope.caller;

    let response = match envelope.payload.clone() {
        FundRequest::RegisterCase { filing } => unit(node.register_case(filing, caller)),
        FundRequest::VerifyCase { case_id } => unit(node.verify_case(case_id, caller)),
        FundRequest::RejectCase { case_id } => unit(node.reject_case(case_id, caller)),
        FundRequest::GetCase { case_id } => FundResponse::Case(node.get_case(case_id)),
        FundRequest::OpenCaseForInvestment { case_id } => {
            unit(node.open_case_for_investment(case_id, caller))
        }
        FundRequest::CloseCaseForInvestment { case_id } => {
            unit(node.close_case_for_investment(case_id, caller))
        }
        FundRequest::Invest { case_id, amount } => match node.invest(case_id, amount, caller) {
            Ok(id) => FundResponse::InvestmentId(id),
            Err(err) => err.into(),
        },
        FundRequest::GetInvestment { investment_id } => {
            FundResponse::Investment(node.get_investment(investment_id))
        }
        FundRequest::GetCaseInvestmentData { case_id } => {
            FundResponse::Pool(node.get_case_investment_data(case_id))
        }
        FundRequest::GetCaseInvestments { case_id } => {
            FundResponse::Investments(node.get_case_investments(case_id))
        }
        FundRequest::BalanceOf { investor } => FundResponse::Balance(node.balance_of(&investor)),
    };

    debug!(error = ?response.error_kind(), "Request dispatched");
    envelope.reply(response)
}
