//! # Dispatch Flows
//!
//! Drives the node with serialized `CallEnvelope<FundRequest>` values, the
//! shape a transport would hand to `dispatch`.

#[cfg(test)]
mod tests {
    use super::super::*;
    use fund_runtime::{dispatch, FundRequest, FundResponse};
    use shared_types::{CallEnvelope, CaseStatus, ErrorKind};

    // ===== TEST FIXTURES =====

    fn call(
        node: &fund_runtime::FundNode<lf_03_investment_pool::ManualTimeSource>,
        caller: &str,
        request: FundRequest,
    ) -> FundResponse {
        // Round-trip through JSON so the wire shape is exercised too.
        let envelope = CallEnvelope::new(principal(caller), request);
        let wire = serde_json::to_string(&envelope).unwrap();
        let decoded: CallEnvelope<FundRequest> = serde_json::from_str(&wire).unwrap();

        let reply = dispatch(node, decoded);
        assert_eq!(reply.correlation_id, envelope.correlation_id);
        reply.payload
    }

    // ===== FLOWS =====

    #[test]
    fn test_case_flow_over_dispatch() {
        let node = test_node();

        let register = FundRequest::RegisterCase {
            filing: filing(1, "New York", "Personal injury case"),
        };
        assert_eq!(call(&node, "plaintiff", register.clone()), FundResponse::Ok);
        assert_eq!(
            call(&node, "plaintiff", register).error_kind(),
            Some(ErrorKind::AlreadyExists)
        );

        assert_eq!(
            call(&node, OUTSIDER, FundRequest::VerifyCase { case_id: 1 }).error_kind(),
            Some(ErrorKind::Unauthorized)
        );
        assert_eq!(
            call(&node, ADMIN, FundRequest::VerifyCase { case_id: 1 }),
            FundResponse::Ok
        );
        assert_eq!(
            call(&node, ADMIN, FundRequest::RejectCase { case_id: 1 }).error_kind(),
            Some(ErrorKind::InvalidState)
        );

        match call(&node, OUTSIDER, FundRequest::GetCase { case_id: 1 }) {
            FundResponse::Case(Some(case)) => assert_eq!(case.status, CaseStatus::Verified),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_investment_flow_over_dispatch() {
        let node = test_node();
        assert_eq!(
            call(&node, ADMIN, FundRequest::OpenCaseForInvestment { case_id: 1 }),
            FundResponse::Ok
        );

        let first = call(&node, "alice", FundRequest::Invest { case_id: 1, amount: 1000 });
        let second = call(&node, "bob", FundRequest::Invest { case_id: 1, amount: 500 });
        assert_eq!(first, FundResponse::InvestmentId(1));
        assert_eq!(second, FundResponse::InvestmentId(2));

        match call(&node, "anyone", FundRequest::GetCaseInvestmentData { case_id: 1 }) {
            FundResponse::Pool(pool) => {
                assert_eq!(pool.total_invested, 1500);
                assert_eq!(pool.total_tokens, 1500);
                assert!(pool.is_open);
            }
            other => panic!("unexpected response: {other:?}"),
        }

        match call(&node, "anyone", FundRequest::GetCaseInvestments { case_id: 1 }) {
            FundResponse::Investments(list) => {
                let ids: Vec<_> = list.iter().map(|i| i.investment_id).collect();
                assert_eq!(ids, vec![1, 2]);
            }
            other => panic!("unexpected response: {other:?}"),
        }

        assert_eq!(
            call(&node, "anyone", FundRequest::BalanceOf { investor: principal("bob") }),
            FundResponse::Balance(500)
        );

        call(&node, ADMIN, FundRequest::CloseCaseForInvestment { case_id: 1 });
        assert_eq!(
            call(&node, "carol", FundRequest::Invest { case_id: 1, amount: 10 }).error_kind(),
            Some(ErrorKind::PoolClosed)
        );
    }

    #[test]
    fn test_missing_records_are_absent_not_errors() {
        let node = test_node();
        assert_eq!(
            call(&node, "anyone", FundRequest::GetCase { case_id: 5 }),
            FundResponse::Case(None)
        );
        assert_eq!(
            call(&node, "anyone", FundRequest::GetInvestment { investment_id: 5 }),
            FundResponse::Investment(None)
        );
        match call(&node, "anyone", FundRequest::GetCaseInvestmentData { case_id: 5 }) {
            FundResponse::Pool(pool) => {
                assert_eq!(pool.total_invested, 0);
                assert_eq!(pool.total_tokens, 0);
                assert!(!pool.is_open);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }
}
