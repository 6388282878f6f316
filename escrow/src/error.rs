use thiserror::Error;
use veridao_ledger::LedgerError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EscrowError {
    #[error("escrow amount must be non-zero")]
    ZeroAmount,

    #[error("custody account {0} cannot be a party to an escrow")]
    CustodianParty(String),

    #[error("release time {release_at} is before now ({now})")]
    ReleaseInPast { release_at: u64, now: u64 },

    #[error("voucher {0} already has an unresolved escrow")]
    EscrowPending(String),

    #[error("no escrow exists for voucher {0}")]
    NoActiveEscrow(String),

    #[error("{caller} is not the beneficiary of the escrow from {voucher}")]
    NotBeneficiary { caller: String, voucher: String },

    #[error("escrow from {0} has already been released")]
    AlreadyReleased(String),

    #[error("escrow from {0} is disputed")]
    AlreadyDisputed(String),

    #[error("escrow cannot be released before {release_at} (now {now})")]
    ReleaseTimeNotReached { release_at: u64, now: u64 },

    #[error("value ledger: {0}")]
    Ledger(#[from] LedgerError),
}
