//! Reputation ledger.
//!
//! Scores are cumulative non-negative integers. `update` adds a signed delta;
//! a delta that would take a score below zero (or past `u64::MAX`) is
//! rejected and the score is left untouched.
//!
//! `reward = points × REWARD_PER_POINT`

pub mod error;
pub mod ledger;

pub use error::ReputationError;
pub use ledger::{calculate_reward, ReputationLedger, REWARD_PER_POINT};
