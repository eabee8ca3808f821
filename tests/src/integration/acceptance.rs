//! # Acceptance Walkthroughs
//!
//! ```text
//! register(1) ─→ verify(1) ─→ open pool(1) ─→ invest A 1000 ─→ invest B 500 ─→ close pool(1)
//! ```

#[cfg(test)]
mod tests {
    use super::super::*;
    use shared_types::{CaseStatus, LedgerError};

    const INVESTOR_A: &str = "ST2JHG361ZXG51QTKY2NQCVBPPRRE2KZB1HR05NNC";
    const INVESTOR_B: &str = "ST2NEB84ASENDXKYGJPQW86YXQCEFEX2ZQPG87ND";

    // =========================================================================
    // CASE REGISTRY
    // =========================================================================

    #[test]
    fn test_register_case_records_plaintiff_as_pending() {
        let node = test_node();
        let plaintiff = principal("plaintiff");

        node.register_case(filing(1, "New York", "Personal injury case"), &plaintiff)
            .unwrap();

        let case = node.get_case(1).expect("case registered");
        assert_eq!(case.plaintiff, plaintiff);
        assert_eq!(case.defendant, principal(DEFENDANT));
        assert_eq!(case.details, "Personal injury case");
        assert_eq!(case.status, CaseStatus::Pending);
        assert!(case.verifier.is_none());
    }

    #[test]
    fn test_register_existing_id_fails() {
        let node = test_node();
        let plaintiff = principal("plaintiff");
        node.register_case(filing(1, "New York", "Personal injury case"), &plaintiff)
            .unwrap();

        let result = node.register_case(filing(1, "California", "Another case"), &plaintiff);
        assert_eq!(result, Err(LedgerError::AlreadyExists { case_id: 1 }));
        assert_eq!(node.get_case(1).unwrap().jurisdiction, "New York");
    }

    #[test]
    fn test_admin_verifies_once() {
        let node = test_node();
        node.register_case(filing(1, "New York", "Personal injury case"), &principal("p"))
            .unwrap();

        node.verify_case(1, &principal(ADMIN)).unwrap();
        let case = node.get_case(1).unwrap();
        assert_eq!(case.status, CaseStatus::Verified);
        assert_eq!(case.verifier, Some(principal(ADMIN)));

        assert_eq!(
            node.verify_case(1, &principal(ADMIN)),
            Err(LedgerError::InvalidState {
                case_id: 1,
                status: CaseStatus::Verified,
            })
        );
    }

    #[test]
    fn test_outsider_cannot_verify() {
        let node = test_node();
        node.register_case(filing(1, "New York", "Personal injury case"), &principal("p"))
            .unwrap();

        assert!(matches!(
            node.verify_case(1, &principal(OUTSIDER)),
            Err(LedgerError::Unauthorized { .. })
        ));
        assert_eq!(node.get_case(1).unwrap().status, CaseStatus::Pending);
    }

    #[test]
    fn test_verify_unknown_case() {
        let node = test_node();
        assert_eq!(
            node.verify_case(999, &principal(ADMIN)),
            Err(LedgerError::NotFound { case_id: 999 })
        );
    }

    // =========================================================================
    // INVESTMENT POOL
    // =========================================================================

    #[test]
    fn test_pro_rata_investment_flow() {
        let node = test_node();
        let admin = principal(ADMIN);
        node.open_case_for_investment(1, &admin).unwrap();

        let first = node.invest(1, 1000, &principal(INVESTOR_A)).unwrap();
        let investment = node.get_investment(first).unwrap();
        assert_eq!(investment.tokens_issued, 1000);
        assert_eq!(investment.investment_date, BLOCK_TIME);

        let pool = node.get_case_investment_data(1);
        assert_eq!((pool.total_invested, pool.total_tokens), (1000, 1000));
        assert_eq!(node.balance_of(&principal(INVESTOR_A)), 1000);

        let second = node.invest(1, 500, &principal(INVESTOR_B)).unwrap();
        assert_eq!(second, first + 1);
        assert_eq!(node.get_investment(second).unwrap().tokens_issued, 500);

        let pool = node.get_case_investment_data(1);
        assert_eq!((pool.total_invested, pool.total_tokens), (1500, 1500));
        assert_eq!(node.balance_of(&principal(INVESTOR_B)), 500);
    }

    #[test]
    fn test_closed_pool_rejects_investment() {
        let node = test_node();
        let admin = principal(ADMIN);
        node.open_case_for_investment(1, &admin).unwrap();
        node.close_case_for_investment(1, &admin).unwrap();

        assert_eq!(
            node.invest(1, 1000, &principal(INVESTOR_A)),
            Err(LedgerError::PoolClosed { case_id: 1 })
        );
        assert_eq!(node.balance_of(&principal(INVESTOR_A)), 0);
    }

    #[test]
    fn test_zero_investment_rejected() {
        let node = test_node();
        node.open_case_for_investment(1, &principal(ADMIN)).unwrap();

        assert_eq!(
            node.invest(1, 0, &principal(INVESTOR_A)),
            Err(LedgerError::InvalidAmount { amount: 0 })
        );
        assert_eq!(node.get_case_investment_data(1).total_invested, 0);
    }

    #[test]
    fn test_pool_gate_is_independent_of_case_status() {
        let node = test_node();
        let admin = principal(ADMIN);
        node.register_case(filing(1, "New York", "Personal injury case"), &principal("p"))
            .unwrap();
        node.reject_case(1, &admin).unwrap();
        node.open_case_for_investment(1, &admin).unwrap();

        assert!(node.invest(1, 100, &principal(INVESTOR_A)).is_ok());

        // A pool may exist for an id that was never registered.
        node.open_case_for_investment(77, &admin).unwrap();
        assert!(node.invest(77, 100, &principal(INVESTOR_A)).is_ok());
        assert!(node.get_case(77).is_none());
    }

    #[test]
    fn test_outsider_cannot_gate_pools() {
        let node = test_node();
        assert!(matches!(
            node.open_case_for_investment(1, &principal(OUTSIDER)),
            Err(LedgerError::Unauthorized { .. })
        ));
        node.open_case_for_investment(1, &principal(ADMIN)).unwrap();
        assert!(matches!(
            node.close_case_for_investment(1, &principal(OUTSIDER)),
            Err(LedgerError::Unauthorized { .. })
        ));
        assert!(node.get_case_investment_data(1).is_open);
    }
}
