//! Escrow lifecycle: vouch → release | dispute.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use veridao_ledger::ValueLedger;
use veridao_types::{AccountId, Timestamp, ValueAmount};

use crate::error::EscrowError;
use crate::escrow::{Escrow, ReleasePolicy};

/// Escrow records keyed by voucher.
///
/// Every operation validates fully before touching state, and calls the value
/// ledger before recording the outcome, so a failed transfer leaves the
/// escrow map untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowEngine {
    escrows: BTreeMap<AccountId, Escrow>,
    policy: ReleasePolicy,
}

impl EscrowEngine {
    pub fn new(policy: ReleasePolicy) -> Self {
        Self {
            escrows: BTreeMap::new(),
            policy,
        }
    }

    /// Stake `amount` from `voucher` for `beneficiary`.
    ///
    /// The voucher must have approved `custodian` on the ledger for at least
    /// `amount`. A released escrow from the same voucher is replaced; a
    /// pending or disputed one blocks the new vouch.
    #[allow(clippy::too_many_arguments)]
    pub fn vouch<L: ValueLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        custodian: &AccountId,
        voucher: &AccountId,
        beneficiary: &AccountId,
        amount: ValueAmount,
        release_at: Timestamp,
        now: Timestamp,
    ) -> Result<&Escrow, EscrowError> {
        if amount.is_zero() {
            return Err(EscrowError::ZeroAmount);
        }
        if voucher == custodian || beneficiary == custodian {
            return Err(EscrowError::CustodianParty(custodian.to_string()));
        }
        if release_at < now {
            return Err(EscrowError::ReleaseInPast {
                release_at: release_at.as_secs(),
                now: now.as_secs(),
            });
        }
        if self.escrows.get(voucher).is_some_and(Escrow::holds_funds) {
            return Err(EscrowError::EscrowPending(voucher.to_string()));
        }

        ledger.transfer_from(custodian, voucher, custodian, amount)?;

        let escrow = Escrow {
            voucher: voucher.clone(),
            beneficiary: beneficiary.clone(),
            amount,
            release_at,
            created_at: now,
            released: false,
            disputed: false,
        };
        tracing::info!(%voucher, %beneficiary, %amount, %release_at, "escrow created");
        self.escrows.insert(voucher.clone(), escrow);
        Ok(&self.escrows[voucher])
    }

    /// Credit the custodied amount to the beneficiary.
    pub fn release<L: ValueLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        custodian: &AccountId,
        caller: &AccountId,
        voucher: &AccountId,
        now: Timestamp,
    ) -> Result<&Escrow, EscrowError> {
        let escrow = self.open_escrow(caller, voucher)?;
        if self.policy == ReleasePolicy::Enforced && !escrow.release_at.has_passed(now) {
            return Err(EscrowError::ReleaseTimeNotReached {
                release_at: escrow.release_at.as_secs(),
                now: now.as_secs(),
            });
        }
        let amount = escrow.amount;

        ledger.transfer(custodian, caller, amount)?;

        let escrow = self
            .escrows
            .get_mut(voucher)
            .ok_or_else(|| EscrowError::NoActiveEscrow(voucher.to_string()))?;
        escrow.released = true;
        tracing::info!(%voucher, beneficiary = %caller, %amount, "escrow released");
        Ok(escrow)
    }

    /// Freeze the escrow. Funds stay in custody.
    pub fn dispute(
        &mut self,
        caller: &AccountId,
        voucher: &AccountId,
    ) -> Result<&Escrow, EscrowError> {
        self.open_escrow(caller, voucher)?;
        let escrow = self
            .escrows
            .get_mut(voucher)
            .ok_or_else(|| EscrowError::NoActiveEscrow(voucher.to_string()))?;
        escrow.disputed = true;
        tracing::info!(%voucher, beneficiary = %caller, amount = %escrow.amount, "escrow disputed");
        Ok(escrow)
    }

    /// The escrow for `voucher` if `caller` is its beneficiary and it is
    /// neither released nor disputed.
    fn open_escrow(&self, caller: &AccountId, voucher: &AccountId) -> Result<&Escrow, EscrowError> {
        let escrow = self
            .escrows
            .get(voucher)
            .ok_or_else(|| EscrowError::NoActiveEscrow(voucher.to_string()))?;
        if &escrow.beneficiary != caller {
            return Err(EscrowError::NotBeneficiary {
                caller: caller.to_string(),
                voucher: voucher.to_string(),
            });
        }
        if escrow.released {
            return Err(EscrowError::AlreadyReleased(voucher.to_string()));
        }
        if escrow.disputed {
            return Err(EscrowError::AlreadyDisputed(voucher.to_string()));
        }
        Ok(escrow)
    }

    pub fn escrow(&self, voucher: &AccountId) -> Option<&Escrow> {
        self.escrows.get(voucher)
    }

    /// All escrows naming `beneficiary`, in voucher order.
    pub fn escrows_for_beneficiary<'a>(
        &'a self,
        beneficiary: &'a AccountId,
    ) -> impl Iterator<Item = &'a Escrow> + 'a {
        self.escrows
            .values()
            .filter(move |e| &e.beneficiary == beneficiary)
    }

    /// Value the custodian must still hold: pending plus disputed amounts.
    pub fn total_custodied(&self) -> ValueAmount {
        self.escrows
            .values()
            .filter(|e| e.holds_funds())
            .map(|e| e.amount)
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Escrow> {
        self.escrows.values()
    }

    pub fn len(&self) -> usize {
        self.escrows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.escrows.is_empty()
    }
}
