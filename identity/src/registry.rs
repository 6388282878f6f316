//! The identity registry: one current record of each kind per account.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use veridao_types::{AccountId, AttestationKind};

use crate::records::{
    AuthenticationData, BiometricData, ConsentAuthorization, GovernmentIdentification,
    IdentityProfile,
};

/// Attestation maps keyed by account.
///
/// Every setter overwrites; there is no deletion. Access gating happens in
/// the caller before any setter runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRegistry {
    government: BTreeMap<AccountId, GovernmentIdentification>,
    biometric: BTreeMap<AccountId, BiometricData>,
    consent: BTreeMap<AccountId, ConsentAuthorization>,
    authentication: BTreeMap<AccountId, AuthenticationData>,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_government_identification(
        &mut self,
        account: &AccountId,
        record: GovernmentIdentification,
    ) {
        self.government.insert(account.clone(), record);
        log_attested(account, AttestationKind::GovernmentId);
    }

    pub fn set_biometric_data(&mut self, account: &AccountId, record: BiometricData) {
        self.biometric.insert(account.clone(), record);
        log_attested(account, AttestationKind::Biometric);
    }

    pub fn set_consent_authorization(&mut self, account: &AccountId, record: ConsentAuthorization) {
        self.consent.insert(account.clone(), record);
        log_attested(account, AttestationKind::Consent);
    }

    pub fn set_authentication_data(&mut self, account: &AccountId, record: AuthenticationData) {
        self.authentication.insert(account.clone(), record);
        log_attested(account, AttestationKind::Authentication);
    }

    pub fn government_identification(
        &self,
        account: &AccountId,
    ) -> Option<&GovernmentIdentification> {
        self.government.get(account)
    }

    pub fn biometric_data(&self, account: &AccountId) -> Option<&BiometricData> {
        self.biometric.get(account)
    }

    pub fn consent_authorization(&self, account: &AccountId) -> Option<&ConsentAuthorization> {
        self.consent.get(account)
    }

    pub fn authentication_data(&self, account: &AccountId) -> Option<&AuthenticationData> {
        self.authentication.get(account)
    }

    pub fn profile(&self, account: &AccountId) -> IdentityProfile<'_> {
        IdentityProfile {
            government: self.government_identification(account),
            biometric: self.biometric_data(account),
            consent: self.consent_authorization(account),
            authentication: self.authentication_data(account),
        }
    }

    pub fn has(&self, account: &AccountId, kind: AttestationKind) -> bool {
        match kind {
            AttestationKind::GovernmentId => self.government.contains_key(account),
            AttestationKind::Biometric => self.biometric.contains_key(account),
            AttestationKind::Consent => self.consent.contains_key(account),
            AttestationKind::Authentication => self.authentication.contains_key(account),
        }
    }

    /// Number of distinct accounts with at least one attestation.
    pub fn account_count(&self) -> usize {
        let mut accounts: Vec<&AccountId> = self
            .government
            .keys()
            .chain(self.biometric.keys())
            .chain(self.consent.keys())
            .chain(self.authentication.keys())
            .collect();
        accounts.sort();
        accounts.dedup();
        accounts.len()
    }
}

fn log_attested(account: &AccountId, kind: AttestationKind) {
    tracing::info!(%account, %kind, "attestation recorded");
}
