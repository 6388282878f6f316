//! The escrow record.

use serde::{Deserialize, Serialize};
use veridao_types::{AccountId, Timestamp, ValueAmount};

/// Whether the release timestamp gates `release`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleasePolicy {
    /// The timestamp is stored metadata; release is allowed at any time.
    #[default]
    Advisory,
    /// Release is refused until the timestamp has passed.
    Enforced,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscrowStatus {
    /// Funds in custody, awaiting the beneficiary.
    Pending,
    /// Funds credited to the beneficiary.
    Released,
    /// Funds frozen in custody.
    Disputed,
}

/// A custodied stake. `released` and `disputed` are never both set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Escrow {
    pub voucher: AccountId,
    pub beneficiary: AccountId,
    pub amount: ValueAmount,
    pub release_at: Timestamp,
    pub created_at: Timestamp,
    pub released: bool,
    pub disputed: bool,
}

impl Escrow {
    pub fn status(&self) -> EscrowStatus {
        if self.released {
            EscrowStatus::Released
        } else if self.disputed {
            EscrowStatus::Disputed
        } else {
            EscrowStatus::Pending
        }
    }

    /// The amount is still held in custody (pending or disputed).
    pub fn holds_funds(&self) -> bool {
        !self.released
    }
}
