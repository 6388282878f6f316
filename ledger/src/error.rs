use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("insufficient allowance: {spender} may move {allowed} from {owner}, needs {needed}")]
    InsufficientAllowance {
        owner: String,
        spender: String,
        needed: u128,
        allowed: u128,
    },

    #[error("insufficient balance for {account}: need {needed}, have {available}")]
    InsufficientBalance {
        account: String,
        needed: u128,
        available: u128,
    },

    #[error("arithmetic overflow in ledger accounting")]
    Overflow,

    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}
