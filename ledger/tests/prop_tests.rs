use proptest::prelude::*;

use veridao_ledger::{TokenLedger, ValueLedger};
use veridao_types::{AccountId, ContractId, ValueAmount};

fn account(i: usize) -> AccountId {
    AccountId::new(format!("holder_{i}"))
}

proptest! {
    /// No sequence of transfers, successful or not, changes the total supply.
    #[test]
    fn transfers_conserve_supply(
        supply in 1u128..1_000_000,
        moves in prop::collection::vec((0usize..4, 0usize..4, 0u128..500_000), 0..40),
    ) {
        let mut token = TokenLedger::new(ContractId::new([9; 32]), &account(0), ValueAmount::new(supply));
        for (from, to, amount) in moves {
            let _ = token.transfer(&account(from), &account(to), ValueAmount::new(amount));
        }
        let total: ValueAmount = (0..4).map(|i| token.balance_of(&account(i))).sum();
        prop_assert_eq!(total, token.total_supply());
    }

    /// A pull succeeds exactly when both allowance and balance cover it.
    #[test]
    fn pull_requires_allowance_and_balance(
        balance in 0u128..10_000,
        allowed in 0u128..10_000,
        amount in 1u128..10_000,
    ) {
        let owner = account(1);
        let spender = account(2);
        let mut token = TokenLedger::new(ContractId::new([8; 32]), &owner, ValueAmount::new(balance));
        token.approve(&owner, &spender, ValueAmount::new(allowed));
        let result = token.transfer_from(&spender, &owner, &spender, ValueAmount::new(amount));
        prop_assert_eq!(result.is_ok(), amount <= allowed && amount <= balance);
        if result.is_err() {
            prop_assert_eq!(token.balance_of(&owner), ValueAmount::new(balance));
            prop_assert_eq!(token.allowance(&owner, &spender), ValueAmount::new(allowed));
        }
    }
}
