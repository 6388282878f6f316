//! Score storage and reward arithmetic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use veridao_types::AccountId;

use crate::error::ReputationError;

/// Reward units granted per reputation point.
pub const REWARD_PER_POINT: u128 = 100;

/// Reward for a number of reputation points. Pure; cannot overflow for any `u64`.
pub fn calculate_reward(points: u64) -> u128 {
    points as u128 * REWARD_PER_POINT
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationLedger {
    scores: BTreeMap<AccountId, u64>,
}

impl ReputationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current score; accounts never updated score zero.
    pub fn score(&self, account: &AccountId) -> u64 {
        self.scores.get(account).copied().unwrap_or(0)
    }

    /// Score after applying `delta`, without storing it.
    pub fn preview(&self, account: &AccountId, delta: i64) -> Result<u64, ReputationError> {
        let score = self.score(account);
        let next = if delta >= 0 {
            score.checked_add(delta.unsigned_abs())
        } else {
            score.checked_sub(delta.unsigned_abs())
        };
        next.ok_or_else(|| {
            let account = account.to_string();
            if delta < 0 {
                ReputationError::Underflow {
                    account,
                    score,
                    delta,
                }
            } else {
                ReputationError::Overflow {
                    account,
                    score,
                    delta,
                }
            }
        })
    }

    /// Add `delta` to the account's score and return the new score.
    pub fn update(&mut self, account: &AccountId, delta: i64) -> Result<u64, ReputationError> {
        let next = self.preview(account, delta)?;
        self.scores.insert(account.clone(), next);
        tracing::info!(%account, delta, score = next, "reputation updated");
        Ok(next)
    }

    /// Reward redeemable for the account's current score.
    pub fn reward_for(&self, account: &AccountId) -> u128 {
        calculate_reward(self.score(account))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AccountId, u64)> {
        self.scores.iter().map(|(a, s)| (a, *s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acct(s: &str) -> AccountId {
        AccountId::new(s)
    }

    #[test]
    fn reward_is_hundred_per_point() {
        assert_eq!(calculate_reward(0), 0);
        assert_eq!(calculate_reward(10), 1_000);
        assert_eq!(calculate_reward(u64::MAX), u64::MAX as u128 * 100);
    }

    #[test]
    fn updates_accumulate() {
        let mut ledger = ReputationLedger::new();
        let u = acct("u1");
        let initial = ledger.score(&u);
        assert_eq!(ledger.update(&u, 20).unwrap(), initial + 20);
        assert_eq!(ledger.update(&u, 5).unwrap(), initial + 25);
        assert_eq!(ledger.update(&u, -10).unwrap(), initial + 15);
        assert_eq!(ledger.reward_for(&u), 1_500);
    }

    #[test]
    fn underflow_rejected_and_score_kept() {
        let mut ledger = ReputationLedger::new();
        let u = acct("u1");
        ledger.update(&u, 3).unwrap();
        let err = ledger.update(&u, -4).unwrap_err();
        assert_eq!(
            err,
            ReputationError::Underflow {
                account: "u1".into(),
                score: 3,
                delta: -4
            }
        );
        assert_eq!(ledger.score(&u), 3);
    }

    #[test]
    fn overflow_rejected() {
        let mut ledger = ReputationLedger::new();
        let u = acct("u1");
        ledger.update(&u, i64::MAX).unwrap();
        ledger.update(&u, i64::MAX).unwrap();
        assert!(matches!(
            ledger.update(&u, 2),
            Err(ReputationError::Overflow { .. })
        ));
        assert_eq!(ledger.score(&u), u64::MAX - 1);
    }

    #[test]
    fn negative_minimum_delta_handled() {
        let mut ledger = ReputationLedger::new();
        assert!(matches!(
            ledger.update(&acct("u1"), i64::MIN),
            Err(ReputationError::Underflow { .. })
        ));
    }
}
