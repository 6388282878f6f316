//! Attestation records.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernmentIdentification {
    pub id_number: String,
    pub image_uri: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiometricData {
    pub facial_scan_image_uri: String,
    pub fingerprint_data: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentAuthorization {
    pub digital_signature: String,
    pub agreed_to_terms: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationData {
    pub secure_credentials_hash: String,
    pub two_factor_enabled: bool,
}

/// Everything registered for one account.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentityProfile<'a> {
    pub government: Option<&'a GovernmentIdentification>,
    pub biometric: Option<&'a BiometricData>,
    pub consent: Option<&'a ConsentAuthorization>,
    pub authentication: Option<&'a AuthenticationData>,
}

impl IdentityProfile<'_> {
    /// All four attestations are present.
    pub fn is_complete(&self) -> bool {
        self.government.is_some()
            && self.biometric.is_some()
            && self.consent.is_some()
            && self.authentication.is_some()
    }
}
