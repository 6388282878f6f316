//! The value-ledger protocol the registry core depends on.

use veridao_types::{AccountId, ContractId, ValueAmount};

use crate::error::LedgerError;

/// An external fungible-balance service.
///
/// Implementations must be atomic per call: a failed transfer leaves every
/// balance and allowance exactly as it was.
pub trait ValueLedger {
    /// Identifier of the deployed ledger.
    fn id(&self) -> &ContractId;

    fn balance_of(&self, account: &AccountId) -> ValueAmount;

    /// How much `spender` may still pull from `owner`.
    fn allowance(&self, owner: &AccountId, spender: &AccountId) -> ValueAmount;

    /// Pull `amount` from `owner` to `to`, consuming allowance granted to `spender`.
    fn transfer_from(
        &mut self,
        spender: &AccountId,
        owner: &AccountId,
        to: &AccountId,
        amount: ValueAmount,
    ) -> Result<(), LedgerError>;

    /// Move `amount` from `from` (controlled by the caller) to `to`.
    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: ValueAmount,
    ) -> Result<(), LedgerError>;
}
