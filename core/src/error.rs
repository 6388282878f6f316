use thiserror::Error;
use veridao_access::AccessError;
use veridao_escrow::EscrowError;
use veridao_ledger::LedgerError;
use veridao_reputation::ReputationError;

use crate::auth::AuthError;

/// Coarse classification of every failure a DAO operation can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Shutdown active, blacklisted account, missing capability or credential.
    AccessDenied,
    NotFound,
    InvalidState,
    /// Allowance or balance shortfall reported by the value ledger.
    InsufficientValue,
    InvalidArgument,
    /// Configuration, snapshot or I/O failure outside the core operations.
    Internal,
}

#[derive(Debug, Error)]
pub enum DaoError {
    #[error("access control: {0}")]
    Access(#[from] AccessError),

    #[error("reputation: {0}")]
    Reputation(#[from] ReputationError),

    #[error("escrow: {0}")]
    Escrow(#[from] EscrowError),

    #[error("value ledger: {0}")]
    Ledger(#[from] LedgerError),

    #[error("authentication: {0}")]
    Auth(#[from] AuthError),

    #[error("account identifier must not be empty")]
    EmptyAccount,

    #[error("snapshot error: {0}")]
    Snapshot(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DaoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Access(e) => match e {
                AccessError::ShutdownActive
                | AccessError::Blacklisted(_)
                | AccessError::NotOwner(_) => ErrorKind::AccessDenied,
                AccessError::InvalidOwner => ErrorKind::InvalidArgument,
            },
            Self::Reputation(_) => ErrorKind::InvalidArgument,
            Self::Escrow(e) => match e {
                EscrowError::ZeroAmount
                | EscrowError::CustodianParty(_)
                | EscrowError::ReleaseInPast { .. } => ErrorKind::InvalidArgument,
                EscrowError::EscrowPending(_)
                | EscrowError::AlreadyReleased(_)
                | EscrowError::AlreadyDisputed(_)
                | EscrowError::ReleaseTimeNotReached { .. } => ErrorKind::InvalidState,
                EscrowError::NoActiveEscrow(_) => ErrorKind::NotFound,
                EscrowError::NotBeneficiary { .. } => ErrorKind::AccessDenied,
                EscrowError::Ledger(e) => ledger_kind(e),
            },
            Self::Ledger(e) => ledger_kind(e),
            Self::Auth(e) => match e {
                AuthError::InvalidCredential(_) => ErrorKind::AccessDenied,
                AuthError::EmptyChallenge => ErrorKind::InvalidArgument,
            },
            Self::EmptyAccount => ErrorKind::InvalidArgument,
            Self::Snapshot(_) | Self::Config(_) | Self::Io(_) => ErrorKind::Internal,
        }
    }
}

fn ledger_kind(error: &LedgerError) -> ErrorKind {
    match error {
        LedgerError::InsufficientAllowance { .. } | LedgerError::InsufficientBalance { .. } => {
            ErrorKind::InsufficientValue
        }
        LedgerError::Overflow => ErrorKind::InvalidState,
        LedgerError::Unavailable(_) => ErrorKind::Internal,
    }
}
