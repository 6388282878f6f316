use proptest::prelude::*;

use veridao_reputation::{calculate_reward, ReputationLedger};
use veridao_types::AccountId;

proptest! {
    /// reward(p) == p * 100 for every point count.
    #[test]
    fn reward_is_linear(points in any::<u64>()) {
        prop_assert_eq!(calculate_reward(points), points as u128 * 100);
    }

    /// Non-negative deltas accumulate: final == initial + sum.
    #[test]
    fn scores_are_cumulative(deltas in prop::collection::vec(0i64..1_000_000, 0..50)) {
        let mut ledger = ReputationLedger::new();
        let account = AccountId::new("subject");
        let initial = ledger.score(&account);
        for d in &deltas {
            ledger.update(&account, *d).unwrap();
        }
        let sum: u64 = deltas.iter().map(|d| *d as u64).sum();
        prop_assert_eq!(ledger.score(&account), initial + sum);
    }

    /// Mixed deltas never drive a score negative; rejected deltas change nothing.
    #[test]
    fn scores_never_negative(deltas in prop::collection::vec(-1_000i64..1_000, 0..80)) {
        let mut ledger = ReputationLedger::new();
        let account = AccountId::new("subject");
        let mut expected: i128 = 0;
        for d in deltas {
            let before = ledger.score(&account);
            match ledger.update(&account, d) {
                Ok(score) => {
                    expected += d as i128;
                    prop_assert_eq!(score as i128, expected);
                }
                Err(_) => {
                    prop_assert!(expected + (d as i128) < 0);
                    prop_assert_eq!(ledger.score(&account), before);
                }
            }
        }
    }
}
