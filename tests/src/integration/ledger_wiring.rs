//! # Ledger Wiring
//!
//! Checks the token ledger as the investment pool's minter, below the node
//! facade.

#[cfg(test)]
mod tests {
    use super::super::*;
    use fund_runtime::adapters::TokenLedgerMinter;
    use fund_runtime::SubsystemContainer;
    use lf_01_token_ledger::{TokenLedger, TokenLedgerApi};
    use lf_03_investment_pool::{InvestmentPool, InvestmentPoolApi};
    use shared_types::{Administrator, LedgerError};

    #[test]
    fn test_container_mints_into_ledger() {
        let mut container = SubsystemContainer::new(&NodeConfig::for_testing(ADMIN));
        let alice = principal("alice");
        container
            .investment_pool
            .open_case_for_investment(1, &principal(ADMIN))
            .unwrap();

        container.invest(1, 1000, &alice, BLOCK_TIME).unwrap();
        container.invest(1, 250, &alice, BLOCK_TIME).unwrap();

        let ledger = &container.token_ledger;
        assert_eq!(ledger.balance_of(&alice), 1250);
        assert_eq!(ledger.total_supply(), 1250);
        assert_eq!(ledger.holder_count(), 1);
    }

    #[test]
    fn test_ledger_overflow_aborts_investment() {
        let mut ledger = TokenLedger::in_memory();
        let alice = principal("alice");
        ledger.mint(&principal("whale"), u128::MAX).unwrap();

        let mut pool = InvestmentPool::in_memory(Administrator::new(principal(ADMIN)));
        pool.open_case_for_investment(1, &principal(ADMIN)).unwrap();

        let mut minter = TokenLedgerMinter::new(&mut ledger);
        let result = pool.invest(1, 10, &alice, BLOCK_TIME, &mut minter);

        assert!(matches!(result, Err(LedgerError::ArithmeticOverflow { .. })));
        assert_eq!(pool.investment_count(), 0);
        assert_eq!(pool.get_case_investment_data(1).total_invested, 0);
        assert_eq!(ledger.balance_of(&alice), 0);
        assert_eq!(ledger.total_supply(), u128::MAX);
    }
}
