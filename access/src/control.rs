//! Owner capability, membership lists and the shutdown switch.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use veridao_types::AccountId;

use crate::error::AccessError;

/// Access-control state.
///
/// Administration (list changes, shutdown toggling, ownership transfer) is
/// owner-only and deliberately not subject to the shutdown flag or the
/// blacklist: the owner must always be able to lift a shutdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessControl {
    owner: AccountId,
    whitelist: BTreeSet<AccountId>,
    blacklist: BTreeSet<AccountId>,
    emergency_shutdown: bool,
}

impl AccessControl {
    pub fn new(owner: AccountId) -> Result<Self, AccessError> {
        if !owner.is_valid() {
            return Err(AccessError::InvalidOwner);
        }
        Ok(Self {
            owner,
            whitelist: BTreeSet::new(),
            blacklist: BTreeSet::new(),
            emergency_shutdown: false,
        })
    }

    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    pub fn is_owner(&self, account: &AccountId) -> bool {
        &self.owner == account
    }

    // ── Guards ─────────────────────────────────────────────────────────

    pub fn ensure_owner(&self, caller: &AccountId) -> Result<(), AccessError> {
        if self.is_owner(caller) {
            Ok(())
        } else {
            tracing::warn!(%caller, "administrative call rejected: not owner");
            Err(AccessError::NotOwner(caller.to_string()))
        }
    }

    pub fn ensure_live(&self) -> Result<(), AccessError> {
        if self.emergency_shutdown {
            tracing::warn!("call rejected: emergency shutdown active");
            Err(AccessError::ShutdownActive)
        } else {
            Ok(())
        }
    }

    pub fn ensure_not_blacklisted(&self, account: &AccountId) -> Result<(), AccessError> {
        if self.blacklist.contains(account) {
            tracing::warn!(%account, "call rejected: account blacklisted");
            Err(AccessError::Blacklisted(account.to_string()))
        } else {
            Ok(())
        }
    }

    /// The standard guard for a mutating call: the system is live and neither
    /// the caller nor any target account is blacklisted.
    pub fn guard(&self, caller: &AccountId, targets: &[&AccountId]) -> Result<(), AccessError> {
        self.ensure_live()?;
        self.ensure_not_blacklisted(caller)?;
        for target in targets {
            self.ensure_not_blacklisted(target)?;
        }
        Ok(())
    }

    // ── Whitelist ──────────────────────────────────────────────────────

    /// Returns whether membership changed.
    pub fn add_to_whitelist(
        &mut self,
        caller: &AccountId,
        account: &AccountId,
    ) -> Result<bool, AccessError> {
        self.ensure_owner(caller)?;
        let changed = self.whitelist.insert(account.clone());
        tracing::debug!(%account, changed, "whitelist add");
        Ok(changed)
    }

    pub fn remove_from_whitelist(
        &mut self,
        caller: &AccountId,
        account: &AccountId,
    ) -> Result<bool, AccessError> {
        self.ensure_owner(caller)?;
        let changed = self.whitelist.remove(account);
        tracing::debug!(%account, changed, "whitelist remove");
        Ok(changed)
    }

    pub fn is_whitelisted(&self, account: &AccountId) -> bool {
        self.whitelist.contains(account)
    }

    // ── Blacklist ──────────────────────────────────────────────────────

    pub fn add_to_blacklist(
        &mut self,
        caller: &AccountId,
        account: &AccountId,
    ) -> Result<bool, AccessError> {
        self.ensure_owner(caller)?;
        let changed = self.blacklist.insert(account.clone());
        tracing::debug!(%account, changed, "blacklist add");
        Ok(changed)
    }

    pub fn remove_from_blacklist(
        &mut self,
        caller: &AccountId,
        account: &AccountId,
    ) -> Result<bool, AccessError> {
        self.ensure_owner(caller)?;
        let changed = self.blacklist.remove(account);
        tracing::debug!(%account, changed, "blacklist remove");
        Ok(changed)
    }

    pub fn is_blacklisted(&self, account: &AccountId) -> bool {
        self.blacklist.contains(account)
    }

    // ── Shutdown ───────────────────────────────────────────────────────

    pub fn activate_emergency_shutdown(&mut self, caller: &AccountId) -> Result<bool, AccessError> {
        self.set_shutdown(caller, true)
    }

    pub fn deactivate_emergency_shutdown(
        &mut self,
        caller: &AccountId,
    ) -> Result<bool, AccessError> {
        self.set_shutdown(caller, false)
    }

    pub fn emergency_shutdown(&self) -> bool {
        self.emergency_shutdown
    }

    fn set_shutdown(&mut self, caller: &AccountId, active: bool) -> Result<bool, AccessError> {
        self.ensure_owner(caller)?;
        let changed = self.emergency_shutdown != active;
        self.emergency_shutdown = active;
        if changed {
            tracing::info!(active, "emergency shutdown toggled");
        }
        Ok(changed)
    }

    // ── Ownership ──────────────────────────────────────────────────────

    /// Hand the owner capability to `new_owner`, returning the previous owner.
    pub fn transfer_ownership(
        &mut self,
        caller: &AccountId,
        new_owner: AccountId,
    ) -> Result<AccountId, AccessError> {
        self.ensure_owner(caller)?;
        if !new_owner.is_valid() {
            return Err(AccessError::InvalidOwner);
        }
        tracing::info!(previous = %self.owner, new = %new_owner, "ownership transferred");
        Ok(std::mem::replace(&mut self.owner, new_owner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acct(s: &str) -> AccountId {
        AccountId::new(s)
    }

    fn control() -> AccessControl {
        AccessControl::new(acct("owner")).unwrap()
    }

    #[test]
    fn empty_owner_rejected() {
        assert_eq!(AccessControl::new(acct("")), Err(AccessError::InvalidOwner));
    }

    #[test]
    fn whitelist_add_then_remove() {
        let mut ac = control();
        assert!(ac.add_to_whitelist(&acct("owner"), &acct("u1")).unwrap());
        assert!(ac.is_whitelisted(&acct("u1")));
        assert!(ac.remove_from_whitelist(&acct("owner"), &acct("u1")).unwrap());
        assert!(!ac.is_whitelisted(&acct("u1")));
    }

    #[test]
    fn blacklist_add_then_remove() {
        let mut ac = control();
        ac.add_to_blacklist(&acct("owner"), &acct("u1")).unwrap();
        assert!(ac.is_blacklisted(&acct("u1")));
        ac.remove_from_blacklist(&acct("owner"), &acct("u1")).unwrap();
        assert!(!ac.is_blacklisted(&acct("u1")));
    }

    #[test]
    fn repeated_membership_changes_report_no_change() {
        let mut ac = control();
        assert!(ac.add_to_blacklist(&acct("owner"), &acct("u1")).unwrap());
        assert!(!ac.add_to_blacklist(&acct("owner"), &acct("u1")).unwrap());
        assert!(!ac.remove_from_whitelist(&acct("owner"), &acct("nobody")).unwrap());
    }

    #[test]
    fn lists_are_independent() {
        let mut ac = control();
        ac.add_to_whitelist(&acct("owner"), &acct("u1")).unwrap();
        ac.add_to_blacklist(&acct("owner"), &acct("u1")).unwrap();
        assert!(ac.is_whitelisted(&acct("u1")));
        assert!(ac.is_blacklisted(&acct("u1")));
    }

    #[test]
    fn non_owner_cannot_administer() {
        let mut ac = control();
        let err = ac.add_to_whitelist(&acct("mallory"), &acct("u1")).unwrap_err();
        assert_eq!(err, AccessError::NotOwner("mallory".into()));
        assert!(ac.activate_emergency_shutdown(&acct("mallory")).is_err());
        assert!(!ac.emergency_shutdown());
    }

    #[test]
    fn shutdown_toggles_and_gates() {
        let mut ac = control();
        assert!(ac.guard(&acct("u1"), &[]).is_ok());
        ac.activate_emergency_shutdown(&acct("owner")).unwrap();
        assert!(ac.emergency_shutdown());
        assert_eq!(ac.guard(&acct("u1"), &[]), Err(AccessError::ShutdownActive));
        ac.deactivate_emergency_shutdown(&acct("owner")).unwrap();
        assert!(!ac.emergency_shutdown());
    }

    #[test]
    fn guard_checks_targets() {
        let mut ac = control();
        ac.add_to_blacklist(&acct("owner"), &acct("bad")).unwrap();
        assert_eq!(
            ac.guard(&acct("u1"), &[&acct("bad")]),
            Err(AccessError::Blacklisted("bad".into()))
        );
        assert_eq!(
            ac.guard(&acct("bad"), &[]),
            Err(AccessError::Blacklisted("bad".into()))
        );
    }

    #[test]
    fn owner_can_lift_shutdown_even_if_blacklisted() {
        let mut ac = control();
        ac.add_to_blacklist(&acct("owner"), &acct("owner")).unwrap();
        ac.activate_emergency_shutdown(&acct("owner")).unwrap();
        ac.deactivate_emergency_shutdown(&acct("owner")).unwrap();
        ac.remove_from_blacklist(&acct("owner"), &acct("owner")).unwrap();
        assert!(!ac.is_blacklisted(&acct("owner")));
    }

    #[test]
    fn ownership_transfer_moves_capability() {
        let mut ac = control();
        let previous = ac.transfer_ownership(&acct("owner"), acct("next")).unwrap();
        assert_eq!(previous, acct("owner"));
        assert!(ac.ensure_owner(&acct("owner")).is_err());
        assert!(ac.ensure_owner(&acct("next")).is_ok());
        assert_eq!(
            ac.transfer_ownership(&acct("next"), acct(" ")),
            Err(AccessError::InvalidOwner)
        );
    }
}
