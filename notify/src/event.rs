//! Event payloads.

use serde::{Deserialize, Serialize};
use veridao_types::{AccountId, AttestationKind, Timestamp, ValueAmount};

/// A message addressed to one account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub recipient: AccountId,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaoEvent {
    NotificationSent(NotificationRecord),
    IdentityAttested {
        account: AccountId,
        kind: AttestationKind,
    },
    ReputationUpdated {
        account: AccountId,
        delta: i64,
        score: u64,
    },
    WhitelistChanged {
        account: AccountId,
        listed: bool,
    },
    BlacklistChanged {
        account: AccountId,
        listed: bool,
    },
    EmergencyShutdownChanged {
        active: bool,
    },
    OwnershipTransferred {
        previous: AccountId,
        new: AccountId,
    },
    EscrowCreated {
        voucher: AccountId,
        beneficiary: AccountId,
        amount: ValueAmount,
        release_at: Timestamp,
    },
    EscrowReleased {
        voucher: AccountId,
        beneficiary: AccountId,
        amount: ValueAmount,
    },
    EscrowDisputed {
        voucher: AccountId,
        beneficiary: AccountId,
    },
}

impl DaoEvent {
    /// Stable name of the event kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotificationSent(_) => "NotificationSent",
            Self::IdentityAttested { .. } => "IdentityAttested",
            Self::ReputationUpdated { .. } => "ReputationUpdated",
            Self::WhitelistChanged { .. } => "WhitelistChanged",
            Self::BlacklistChanged { .. } => "BlacklistChanged",
            Self::EmergencyShutdownChanged { .. } => "EmergencyShutdownChanged",
            Self::OwnershipTransferred { .. } => "OwnershipTransferred",
            Self::EscrowCreated { .. } => "EscrowCreated",
            Self::EscrowReleased { .. } => "EscrowReleased",
            Self::EscrowDisputed { .. } => "EscrowDisputed",
        }
    }

    pub fn as_notification(&self) -> Option<&NotificationRecord> {
        match self {
            Self::NotificationSent(record) => Some(record),
            _ => None,
        }
    }
}

/// An event as stored in the log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub sequence: u64,
    pub emitted_at: Timestamp,
    pub event: DaoEvent,
}
