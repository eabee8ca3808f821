//! # Cross-Subsystem Invariants
//!
//! Properties that span the pool, the investment log and the token ledger.
//!
//! | Property | Statement |
//! |----------|-----------|
//! | Supply | Ledger total supply equals the sum of `total_tokens` over all pools |
//! | Log | Each pool's `total_invested` equals the sum of its logged amounts |
//! | Ids | Investment ids are dense and start at 1 |
//! | Failure | A rejected `invest` changes no observable state |

#[cfg(test)]
mod tests {
    use super::super::*;
    use proptest::prelude::*;
    use shared_types::Amount;

    #[derive(Debug, Clone)]
    enum Step {
        Open(u64),
        Close(u64),
        Invest { case_id: u64, investor: u8, amount: u64 },
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            1 => (1u64..4).prop_map(Step::Open),
            1 => (1u64..4).prop_map(Step::Close),
            3 => (1u64..4, 0u8..3, 0u64..10_000)
                .prop_map(|(case_id, investor, amount)| Step::Invest { case_id, investor, amount }),
        ]
    }

    proptest! {
        #[test]
        fn prop_ledger_matches_pools_and_log(steps in proptest::collection::vec(step(), 0..80)) {
            let node = test_node();
            let admin = principal(ADMIN);
            let investors: Vec<_> =
                (0..3).map(|i| principal(&format!("investor-{i}"))).collect();
            let mut accepted = 0u64;

            for step in steps {
                match step {
                    Step::Open(case_id) => node.open_case_for_investment(case_id, &admin).unwrap(),
                    Step::Close(case_id) => {
                        node.close_case_for_investment(case_id, &admin).unwrap()
                    }
                    Step::Invest { case_id, investor, amount } => {
                        let investor = &investors[investor as usize];
                        let pool_before = node.get_case_investment_data(case_id);
                        let balance_before = node.balance_of(investor);

                        match node.invest(case_id, Amount::from(amount), investor) {
                            Ok(id) => {
                                accepted += 1;
                                prop_assert_eq!(id, accepted);
                            }
                            Err(_) => {
                                let pool_after = node.get_case_investment_data(case_id);
                                prop_assert_eq!(pool_after, pool_before);
                                prop_assert_eq!(node.balance_of(investor), balance_before);
                            }
                        }
                    }
                }
            }

            let mut tokens_in_pools: Amount = 0;
            for case_id in 1u64..4 {
                let pool = node.get_case_investment_data(case_id);
                let logged: Amount = node
                    .get_case_investments(case_id)
                    .iter()
                    .map(|i| i.amount)
                    .sum();
                prop_assert_eq!(pool.total_invested, logged);
                tokens_in_pools += pool.total_tokens;
            }

            let balances: Amount = investors.iter().map(|p| node.balance_of(p)).sum();
            prop_assert_eq!(node.total_supply(), tokens_in_pools);
            prop_assert_eq!(balances, tokens_in_pools);
        }
    }
}
