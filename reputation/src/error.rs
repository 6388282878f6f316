use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReputationError {
    #[error("reputation of {account} would drop below zero: score {score}, delta {delta}")]
    Underflow {
        account: String,
        score: u64,
        delta: i64,
    },

    #[error("reputation of {account} would overflow: score {score}, delta {delta}")]
    Overflow {
        account: String,
        score: u64,
        delta: i64,
    },
}
