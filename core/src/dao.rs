//! The identity-verification DAO context object.

use std::sync::Arc;
use veridao_access::AccessControl;
use veridao_escrow::{Escrow, EscrowEngine};
use veridao_identity::{
    AuthenticationData, BiometricData, ConsentAuthorization, GovernmentIdentification,
    IdentityProfile, IdentityRegistry,
};
use veridao_ledger::ValueLedger;
use veridao_notify::{DaoEvent, EventLog, EventRecord, NotificationRecord};
use veridao_reputation::ReputationLedger;
use veridao_types::{AccountId, AttestationKind, Clock, ContractId, Timestamp, ValueAmount};

use crate::auth::Session;
use crate::snapshot::DaoSnapshot;
use crate::{DaoConfig, DaoError};

/// All registry state plus the value ledger it custodies funds on.
///
/// Every mutating operation runs in the same order: validate arguments,
/// consult access control, perform the component check and any ledger call,
/// then commit state and append one event. A failure at any step returns
/// before the commit, so failed calls leave no trace in state or the log.
pub struct IdentityVerificationDao<L: ValueLedger> {
    id: ContractId,
    custody: AccountId,
    config: DaoConfig,
    access: AccessControl,
    identity: IdentityRegistry,
    reputation: ReputationLedger,
    escrows: EscrowEngine,
    log: EventLog,
    ledger: L,
    clock: Arc<dyn Clock>,
}

fn require_account(account: &AccountId) -> Result<(), DaoError> {
    if account.is_valid() {
        Ok(())
    } else {
        Err(DaoError::EmptyAccount)
    }
}

impl<L: ValueLedger> IdentityVerificationDao<L> {
    pub fn new(
        id: ContractId,
        owner: AccountId,
        ledger: L,
        clock: Arc<dyn Clock>,
        config: DaoConfig,
    ) -> Result<Self, DaoError> {
        let access = AccessControl::new(owner)?;
        let custody = id.custody_account();
        tracing::info!(
            dao = %id,
            token = %ledger.id(),
            owner = %access.owner(),
            policy = ?config.release_policy,
            "identity verification DAO initialised"
        );
        Ok(Self {
            id,
            custody,
            escrows: EscrowEngine::new(config.release_policy),
            config,
            access,
            identity: IdentityRegistry::new(),
            reputation: ReputationLedger::new(),
            log: EventLog::new(),
            ledger,
            clock,
        })
    }

    fn emit(&mut self, event: DaoEvent, at: Timestamp) {
        self.log.append(event, at);
    }

    fn attest_guard(&self, caller: &AccountId) -> Result<Timestamp, DaoError> {
        require_account(caller)?;
        self.access.guard(caller, &[])?;
        Ok(self.clock.now())
    }

    fn record_attestation(&mut self, caller: &AccountId, kind: AttestationKind, at: Timestamp) {
        self.emit(
            DaoEvent::IdentityAttested {
                account: caller.clone(),
                kind,
            },
            at,
        );
    }

    // ── Identity ───────────────────────────────────────────────────────

    /// Record the caller's government ID, replacing any earlier one.
    pub fn set_government_identification(
        &mut self,
        caller: &AccountId,
        id_number: impl Into<String>,
        image_uri: impl Into<String>,
    ) -> Result<(), DaoError> {
        let now = self.attest_guard(caller)?;
        self.identity.set_government_identification(
            caller,
            GovernmentIdentification {
                id_number: id_number.into(),
                image_uri: image_uri.into(),
            },
        );
        self.record_attestation(caller, AttestationKind::GovernmentId, now);
        Ok(())
    }

    /// Record the caller's biometric references.
    pub fn set_biometric_data(
        &mut self,
        caller: &AccountId,
        facial_scan_image_uri: impl Into<String>,
        fingerprint_data: impl Into<String>,
    ) -> Result<(), DaoError> {
        let now = self.attest_guard(caller)?;
        self.identity.set_biometric_data(
            caller,
            BiometricData {
                facial_scan_image_uri: facial_scan_image_uri.into(),
                fingerprint_data: fingerprint_data.into(),
            },
        );
        self.record_attestation(caller, AttestationKind::Biometric, now);
        Ok(())
    }

    /// Record the caller's signed consent.
    pub fn set_consent_authorization(
        &mut self,
        caller: &AccountId,
        digital_signature: impl Into<String>,
        agreed_to_terms: bool,
    ) -> Result<(), DaoError> {
        let now = self.attest_guard(caller)?;
        self.identity.set_consent_authorization(
            caller,
            ConsentAuthorization {
                digital_signature: digital_signature.into(),
                agreed_to_terms,
            },
        );
        self.record_attestation(caller, AttestationKind::Consent, now);
        Ok(())
    }

    /// Record the caller's credential hash and 2FA flag.
    pub fn set_authentication_data(
        &mut self,
        caller: &AccountId,
        secure_credentials_hash: impl Into<String>,
        two_factor_enabled: bool,
    ) -> Result<(), DaoError> {
        let now = self.attest_guard(caller)?;
        self.identity.set_authentication_data(
            caller,
            AuthenticationData {
                secure_credentials_hash: secure_credentials_hash.into(),
                two_factor_enabled,
            },
        );
        self.record_attestation(caller, AttestationKind::Authentication, now);
        Ok(())
    }

    pub fn government_identification(
        &self,
        account: &AccountId,
    ) -> Option<&GovernmentIdentification> {
        self.identity.government_identification(account)
    }

    pub fn biometric_data(&self, account: &AccountId) -> Option<&BiometricData> {
        self.identity.biometric_data(account)
    }

    pub fn consent_authorization(&self, account: &AccountId) -> Option<&ConsentAuthorization> {
        self.identity.consent_authorization(account)
    }

    pub fn authentication_data(&self, account: &AccountId) -> Option<&AuthenticationData> {
        self.identity.authentication_data(account)
    }

    /// All four records for `account`, whichever are present.
    pub fn profile(&self, account: &AccountId) -> IdentityProfile<'_> {
        self.identity.profile(account)
    }

    pub fn is_complete(&self, account: &AccountId) -> bool {
        self.identity.profile(account).is_complete()
    }

    // ── Reputation ─────────────────────────────────────────────────────

    /// Add `delta` to `account`'s score. Owner only.
    ///
    /// A delta that would take the score below zero or past `u64::MAX` is
    /// rejected and the score is left as it was.
    pub fn update_reputation(
        &mut self,
        caller: &AccountId,
        account: &AccountId,
        delta: i64,
    ) -> Result<u64, DaoError> {
        require_account(caller)?;
        require_account(account)?;
        self.access.ensure_owner(caller)?;
        self.access.guard(caller, &[account])?;
        let score = self.reputation.update(account, delta)?;
        let now = self.clock.now();
        self.emit(
            DaoEvent::ReputationUpdated {
                account: account.clone(),
                delta,
                score,
            },
            now,
        );
        Ok(score)
    }

    pub fn reputation(&self, account: &AccountId) -> u64 {
        self.reputation.score(account)
    }

    /// Reward redeemable for `account`'s current score.
    pub fn reward_for(&self, account: &AccountId) -> u128 {
        self.reputation.reward_for(account)
    }

    pub fn calculate_reward(points: u64) -> u128 {
        veridao_reputation::calculate_reward(points)
    }

    // ── Access control ─────────────────────────────────────────────────

    /// Owner only. Returns `false` if `account` was already listed.
    pub fn add_to_whitelist(
        &mut self,
        caller: &AccountId,
        account: &AccountId,
    ) -> Result<bool, DaoError> {
        require_account(account)?;
        let changed = self.access.add_to_whitelist(caller, account)?;
        self.list_changed(changed, account, true, false);
        Ok(changed)
    }

    /// Owner only. Returns `false` if `account` was not listed.
    pub fn remove_from_whitelist(
        &mut self,
        caller: &AccountId,
        account: &AccountId,
    ) -> Result<bool, DaoError> {
        let changed = self.access.remove_from_whitelist(caller, account)?;
        self.list_changed(changed, account, false, false);
        Ok(changed)
    }

    /// Bar `account` from every guarded operation. Owner only.
    pub fn add_to_blacklist(
        &mut self,
        caller: &AccountId,
        account: &AccountId,
    ) -> Result<bool, DaoError> {
        require_account(account)?;
        let changed = self.access.add_to_blacklist(caller, account)?;
        self.list_changed(changed, account, true, true);
        Ok(changed)
    }

    /// Owner only. Returns `false` if `account` was not listed.
    pub fn remove_from_blacklist(
        &mut self,
        caller: &AccountId,
        account: &AccountId,
    ) -> Result<bool, DaoError> {
        let changed = self.access.remove_from_blacklist(caller, account)?;
        self.list_changed(changed, account, false, true);
        Ok(changed)
    }

    fn list_changed(&mut self, changed: bool, account: &AccountId, listed: bool, blacklist: bool) {
        if !changed {
            return;
        }
        let account = account.clone();
        let event = if blacklist {
            DaoEvent::BlacklistChanged { account, listed }
        } else {
            DaoEvent::WhitelistChanged { account, listed }
        };
        let now = self.clock.now();
        self.emit(event, now);
    }

    pub fn is_whitelisted(&self, account: &AccountId) -> bool {
        self.access.is_whitelisted(account)
    }

    pub fn is_blacklisted(&self, account: &AccountId) -> bool {
        self.access.is_blacklisted(account)
    }

    /// Halt every guarded operation. Administration keeps working.
    pub fn activate_emergency_shutdown(&mut self, caller: &AccountId) -> Result<bool, DaoError> {
        let changed = self.access.activate_emergency_shutdown(caller)?;
        self.shutdown_changed(changed, true);
        Ok(changed)
    }

    /// Owner only.
    pub fn deactivate_emergency_shutdown(&mut self, caller: &AccountId) -> Result<bool, DaoError> {
        let changed = self.access.deactivate_emergency_shutdown(caller)?;
        self.shutdown_changed(changed, false);
        Ok(changed)
    }

    fn shutdown_changed(&mut self, changed: bool, active: bool) {
        if changed {
            let now = self.clock.now();
            self.emit(DaoEvent::EmergencyShutdownChanged { active }, now);
        }
    }

    pub fn emergency_shutdown(&self) -> bool {
        self.access.emergency_shutdown()
    }

    pub fn owner(&self) -> &AccountId {
        self.access.owner()
    }

    /// Hand the owner capability to `new_owner`. Owner only.
    pub fn transfer_ownership(
        &mut self,
        caller: &AccountId,
        new_owner: AccountId,
    ) -> Result<(), DaoError> {
        let new = new_owner.clone();
        let previous = self.access.transfer_ownership(caller, new_owner)?;
        let now = self.clock.now();
        self.emit(DaoEvent::OwnershipTransferred { previous, new }, now);
        Ok(())
    }

    pub fn access(&self) -> &AccessControl {
        &self.access
    }

    // ── Escrow ─────────────────────────────────────────────────────────

    /// Stake `amount` from `voucher` on `beneficiary`'s identity.
    ///
    /// The voucher must already have approved [`custody_account`] on the
    /// value ledger for at least `amount`. The custody account itself can be
    /// neither voucher nor beneficiary.
    ///
    /// [`custody_account`]: Self::custody_account
    pub fn vouch_for_identity(
        &mut self,
        voucher: &AccountId,
        beneficiary: &AccountId,
        amount: ValueAmount,
        release_at: Timestamp,
    ) -> Result<Escrow, DaoError> {
        require_account(voucher)?;
        require_account(beneficiary)?;
        self.access.guard(voucher, &[beneficiary])?;
        let now = self.clock.now();
        let escrow = self
            .escrows
            .vouch(
                &mut self.ledger,
                &self.custody,
                voucher,
                beneficiary,
                amount,
                release_at,
                now,
            )?
            .clone();
        self.emit(
            DaoEvent::EscrowCreated {
                voucher: escrow.voucher.clone(),
                beneficiary: escrow.beneficiary.clone(),
                amount: escrow.amount,
                release_at: escrow.release_at,
            },
            now,
        );
        Ok(escrow)
    }

    /// Beneficiary claims the escrow staked by `voucher`.
    pub fn release_escrow(
        &mut self,
        caller: &AccountId,
        voucher: &AccountId,
    ) -> Result<Escrow, DaoError> {
        require_account(caller)?;
        self.access.guard(caller, &[])?;
        let now = self.clock.now();
        let escrow = self
            .escrows
            .release(&mut self.ledger, &self.custody, caller, voucher, now)?
            .clone();
        self.emit(
            DaoEvent::EscrowReleased {
                voucher: escrow.voucher.clone(),
                beneficiary: escrow.beneficiary.clone(),
                amount: escrow.amount,
            },
            now,
        );
        Ok(escrow)
    }

    /// Beneficiary freezes the escrow staked by `voucher`. Funds stay in
    /// custody pending an outside decision.
    pub fn dispute_escrow(
        &mut self,
        caller: &AccountId,
        voucher: &AccountId,
    ) -> Result<Escrow, DaoError> {
        require_account(caller)?;
        self.access.guard(caller, &[])?;
        let now = self.clock.now();
        let escrow = self.escrows.dispute(caller, voucher)?.clone();
        self.emit(
            DaoEvent::EscrowDisputed {
                voucher: escrow.voucher.clone(),
                beneficiary: escrow.beneficiary.clone(),
            },
            now,
        );
        Ok(escrow)
    }

    pub fn escrow(&self, voucher: &AccountId) -> Option<&Escrow> {
        self.escrows.escrow(voucher)
    }

    pub fn escrows_for_beneficiary<'a>(
        &'a self,
        beneficiary: &'a AccountId,
    ) -> impl Iterator<Item = &'a Escrow> + 'a {
        self.escrows.escrows_for_beneficiary(beneficiary)
    }

    pub fn total_custodied(&self) -> ValueAmount {
        self.escrows.total_custodied()
    }

    // ── Notifications ──────────────────────────────────────────────────

    pub fn emit_notification(
        &mut self,
        caller: &AccountId,
        recipient: &AccountId,
        message: impl Into<String>,
    ) -> Result<NotificationRecord, DaoError> {
        require_account(caller)?;
        require_account(recipient)?;
        self.access.guard(caller, &[recipient])?;
        let now = self.clock.now();
        Ok(self.log.notify(recipient.clone(), message.into(), now))
    }

    pub fn events(&self) -> &[EventRecord] {
        self.log.events()
    }

    pub fn notifications_for<'a>(
        &'a self,
        recipient: &'a AccountId,
    ) -> impl Iterator<Item = &'a NotificationRecord> + 'a {
        self.log.notifications_for(recipient)
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    // ── Wiring ─────────────────────────────────────────────────────────

    pub fn id(&self) -> &ContractId {
        &self.id
    }

    /// Identifier of the value ledger this DAO is bound to.
    pub fn token_id(&self) -> &ContractId {
        self.ledger.id()
    }

    /// The ledger account holding escrowed funds.
    pub fn custody_account(&self) -> &AccountId {
        &self.custody
    }

    pub fn config(&self) -> &DaoConfig {
        &self.config
    }

    /// Authentication bound to this DAO's identifier.
    pub fn session(&self) -> Session {
        Session::new(self.id)
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    // ── Snapshots ──────────────────────────────────────────────────────

    pub fn snapshot(&self) -> Result<DaoSnapshot, DaoError> {
        DaoSnapshot::seal(
            self.clock.now(),
            self.id,
            *self.ledger.id(),
            self.config.clone(),
            self.access.clone(),
            self.identity.clone(),
            self.reputation.clone(),
            self.escrows.clone(),
            self.log.clone(),
        )
    }

    /// Rebuild a DAO from a snapshot, bound to `ledger`.
    ///
    /// Fails if the snapshot hash does not verify or `ledger` is not the
    /// ledger the snapshot was taken against.
    pub fn restore(
        snapshot: DaoSnapshot,
        ledger: L,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DaoError> {
        if !snapshot.verify() {
            return Err(DaoError::Snapshot("hash does not match contents".into()));
        }
        if ledger.id() != &snapshot.token {
            return Err(DaoError::Snapshot(format!(
                "snapshot bound to ledger {}, got {}",
                snapshot.token,
                ledger.id()
            )));
        }
        tracing::info!(
            dao = %snapshot.id,
            events = snapshot.log.len(),
            escrows = snapshot.escrows.len(),
            "DAO restored from snapshot"
        );
        Ok(Self {
            id: snapshot.id,
            custody: snapshot.id.custody_account(),
            config: snapshot.config,
            access: snapshot.access,
            identity: snapshot.identity,
            reputation: snapshot.reputation,
            escrows: snapshot.escrows,
            log: snapshot.log,
            ledger,
            clock,
        })
    }
}
