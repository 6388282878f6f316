//! In-memory allowance-based token ledger.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use veridao_types::{AccountId, ContractId, ValueAmount};

use crate::error::LedgerError;
use crate::value::ValueLedger;

/// Public metadata about a deployed token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub id: ContractId,
    pub name: String,
    pub symbol: String,
    pub total_supply: ValueAmount,
}

/// A fungible token with ERC-20 semantics: balances, approvals and
/// allowance-consuming pulls.
///
/// The whole supply is minted to `minter` at construction; no later minting
/// or burning exists, so the sum of all balances always equals
/// [`TokenLedger::total_supply`].
#[derive(Clone, Debug)]
pub struct TokenLedger {
    info: TokenInfo,
    balances: HashMap<AccountId, ValueAmount>,
    allowances: HashMap<(AccountId, AccountId), ValueAmount>,
}

impl TokenLedger {
    pub fn new(id: ContractId, minter: &AccountId, initial_supply: ValueAmount) -> Self {
        let mut balances = HashMap::new();
        if !initial_supply.is_zero() {
            balances.insert(minter.clone(), initial_supply);
        }
        tracing::info!(token = %id, %minter, supply = %initial_supply, "token ledger created");
        Self {
            info: TokenInfo {
                id,
                name: "IdentityToken".to_string(),
                symbol: "IDT".to_string(),
                total_supply: initial_supply,
            },
            balances,
            allowances: HashMap::new(),
        }
    }

    pub fn info(&self) -> &TokenInfo {
        &self.info
    }

    pub fn total_supply(&self) -> ValueAmount {
        self.info.total_supply
    }

    /// Authorize `spender` to pull up to `amount` from `owner`, replacing any
    /// previous approval.
    pub fn approve(&mut self, owner: &AccountId, spender: &AccountId, amount: ValueAmount) {
        tracing::debug!(%owner, %spender, %amount, "approval set");
        if amount.is_zero() {
            self.allowances.remove(&(owner.clone(), spender.clone()));
        } else {
            self.allowances
                .insert((owner.clone(), spender.clone()), amount);
        }
    }

    /// Number of accounts holding a non-zero balance.
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    fn debit_credit(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: ValueAmount,
    ) -> Result<(), LedgerError> {
        let available = self.balance_of(from);
        let remaining = available
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::InsufficientBalance {
                account: from.to_string(),
                needed: amount.raw(),
                available: available.raw(),
            })?;
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        if remaining.is_zero() {
            self.balances.remove(from);
        } else {
            self.balances.insert(from.clone(), remaining);
        }
        if !credited.is_zero() {
            self.balances.insert(to.clone(), credited);
        }
        Ok(())
    }
}

impl ValueLedger for TokenLedger {
    fn id(&self) -> &ContractId {
        &self.info.id
    }

    fn balance_of(&self, account: &AccountId) -> ValueAmount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn allowance(&self, owner: &AccountId, spender: &AccountId) -> ValueAmount {
        self.allowances
            .get(&(owner.clone(), spender.clone()))
            .copied()
            .unwrap_or_default()
    }

    fn transfer_from(
        &mut self,
        spender: &AccountId,
        owner: &AccountId,
        to: &AccountId,
        amount: ValueAmount,
    ) -> Result<(), LedgerError> {
        let allowed = self.allowance(owner, spender);
        let left = allowed
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::InsufficientAllowance {
                owner: owner.to_string(),
                spender: spender.to_string(),
                needed: amount.raw(),
                allowed: allowed.raw(),
            })?;
        self.debit_credit(owner, to, amount)?;
        self.approve(owner, spender, left);
        Ok(())
    }

    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: ValueAmount,
    ) -> Result<(), LedgerError> {
        self.debit_credit(from, to, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acct(s: &str) -> AccountId {
        AccountId::new(s)
    }

    fn ledger() -> TokenLedger {
        TokenLedger::new(ContractId::new([1; 32]), &acct("minter"), ValueAmount::new(1_000))
    }

    #[test]
    fn initial_supply_goes_to_minter() {
        let token = ledger();
        assert_eq!(token.balance_of(&acct("minter")), ValueAmount::new(1_000));
        assert_eq!(token.total_supply(), ValueAmount::new(1_000));
        assert_eq!(token.info().symbol, "IDT");
    }

    #[test]
    fn transfer_moves_balance() {
        let mut token = ledger();
        token
            .transfer(&acct("minter"), &acct("alice"), ValueAmount::new(300))
            .unwrap();
        assert_eq!(token.balance_of(&acct("minter")), ValueAmount::new(700));
        assert_eq!(token.balance_of(&acct("alice")), ValueAmount::new(300));
    }

    #[test]
    fn transfer_without_funds_changes_nothing() {
        let mut token = ledger();
        let err = token
            .transfer(&acct("alice"), &acct("bob"), ValueAmount::new(1))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBalance { needed: 1, available: 0, .. }));
        assert_eq!(token.holder_count(), 1);
    }

    #[test]
    fn transfer_from_consumes_allowance() {
        let mut token = ledger();
        token.approve(&acct("minter"), &acct("dao"), ValueAmount::new(500));
        token
            .transfer_from(&acct("dao"), &acct("minter"), &acct("dao"), ValueAmount::new(200))
            .unwrap();
        assert_eq!(token.allowance(&acct("minter"), &acct("dao")), ValueAmount::new(300));
        assert_eq!(token.balance_of(&acct("dao")), ValueAmount::new(200));
    }

    #[test]
    fn transfer_from_beyond_allowance_rejected() {
        let mut token = ledger();
        token.approve(&acct("minter"), &acct("dao"), ValueAmount::new(50));
        let err = token
            .transfer_from(&acct("dao"), &acct("minter"), &acct("dao"), ValueAmount::new(51))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientAllowance { allowed: 50, .. }));
        assert_eq!(token.allowance(&acct("minter"), &acct("dao")), ValueAmount::new(50));
        assert_eq!(token.balance_of(&acct("minter")), ValueAmount::new(1_000));
    }

    #[test]
    fn allowance_without_balance_keeps_allowance() {
        let mut token = ledger();
        token.approve(&acct("alice"), &acct("dao"), ValueAmount::new(10));
        let err = token
            .transfer_from(&acct("dao"), &acct("alice"), &acct("dao"), ValueAmount::new(10))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBalance { .. }));
        assert_eq!(token.allowance(&acct("alice"), &acct("dao")), ValueAmount::new(10));
    }
}
