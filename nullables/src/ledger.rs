//! Nullable value ledger: in-memory balances that record every call and
//! can be scripted to fail.

use std::collections::{HashMap, VecDeque};
use veridao_ledger::{LedgerError, ValueLedger};
use veridao_types::{AccountId, ContractId, ValueAmount};

/// A transfer the ledger was asked to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerCall {
    TransferFrom {
        spender: AccountId,
        owner: AccountId,
        to: AccountId,
        amount: ValueAmount,
    },
    Transfer {
        from: AccountId,
        to: AccountId,
        amount: ValueAmount,
    },
}

/// Balances are seeded with [`NullValueLedger::fund`]. Queued failures are
/// returned by the next transfers in order, before any balance is checked.
#[derive(Debug)]
pub struct NullValueLedger {
    id: ContractId,
    balances: HashMap<AccountId, ValueAmount>,
    allowances: HashMap<(AccountId, AccountId), ValueAmount>,
    failures: VecDeque<LedgerError>,
    calls: Vec<LedgerCall>,
}

impl NullValueLedger {
    pub fn new(id: ContractId) -> Self {
        Self {
            id,
            balances: HashMap::new(),
            allowances: HashMap::new(),
            failures: VecDeque::new(),
            calls: Vec::new(),
        }
    }

    /// Credit `account` out of thin air.
    pub fn fund(&mut self, account: &AccountId, amount: ValueAmount) {
        let balance = self.balances.entry(account.clone()).or_default();
        *balance = balance.saturating_add(amount);
    }

    pub fn approve(&mut self, owner: &AccountId, spender: &AccountId, amount: ValueAmount) {
        self.allowances
            .insert((owner.clone(), spender.clone()), amount);
    }

    /// Make the next transfer fail with `error`.
    pub fn fail_next(&mut self, error: LedgerError) {
        self.failures.push_back(error);
    }

    /// Every transfer attempted so far, including failed ones.
    pub fn calls(&self) -> &[LedgerCall] {
        &self.calls
    }

    fn move_value(
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
        self.balances.insert(from.clone(), remaining);
        let credited = self.balance_of(to).saturating_add(amount);
        self.balances.insert(to.clone(), credited);
        Ok(())
    }
}

impl ValueLedger for NullValueLedger {
    fn id(&self) -> &ContractId {
        &self.id
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
        self.calls.push(LedgerCall::TransferFrom {
            spender: spender.clone(),
            owner: owner.clone(),
            to: to.clone(),
            amount,
        });
        if let Some(err) = self.failures.pop_front() {
            return Err(err);
        }
        let allowed = self.allowance(owner, spender);
        let left = allowed
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::InsufficientAllowance {
                owner: owner.to_string(),
                spender: spender.to_string(),
                needed: amount.raw(),
                allowed: allowed.raw(),
            })?;
        self.move_value(owner, to, amount)?;
        self.approve(owner, spender, left);
        Ok(())
    }

    fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: ValueAmount,
    ) -> Result<(), LedgerError> {
        self.calls.push(LedgerCall::Transfer {
            from: from.clone(),
            to: to.clone(),
            amount,
        });
        if let Some(err) = self.failures.pop_front() {
            return Err(err);
        }
        self.move_value(from, to, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acct(s: &str) -> AccountId {
        AccountId::new(s)
    }

    #[test]
    fn scripted_failure_applies_once() {
        let mut ledger = NullValueLedger::new(ContractId::ZERO);
        ledger.fund(&acct("a"), ValueAmount::new(10));
        ledger.fail_next(LedgerError::Unavailable("down".into()));

        assert!(ledger.transfer(&acct("a"), &acct("b"), ValueAmount::new(4)).is_err());
        assert_eq!(ledger.balance_of(&acct("a")), ValueAmount::new(10));

        ledger.transfer(&acct("a"), &acct("b"), ValueAmount::new(4)).unwrap();
        assert_eq!(ledger.balance_of(&acct("b")), ValueAmount::new(4));
        assert_eq!(ledger.calls().len(), 2);
    }

    #[test]
    fn pull_respects_allowance() {
        let mut ledger = NullValueLedger::new(ContractId::ZERO);
        ledger.fund(&acct("owner"), ValueAmount::new(10));
        ledger.approve(&acct("owner"), &acct("spender"), ValueAmount::new(3));
        assert!(matches!(
            ledger.transfer_from(&acct("spender"), &acct("owner"), &acct("spender"), ValueAmount::new(4)),
            Err(LedgerError::InsufficientAllowance { .. })
        ));
        ledger
            .transfer_from(&acct("spender"), &acct("owner"), &acct("spender"), ValueAmount::new(3))
            .unwrap();
        assert_eq!(ledger.allowance(&acct("owner"), &acct("spender")), ValueAmount::ZERO);
    }
}
