//! Kinds of identity attestation an account can register.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttestationKind {
    /// Government-issued identification (document number + image reference).
    GovernmentId,
    /// Facial scan and fingerprint references.
    Biometric,
    /// Signed consent to the registry's terms.
    Consent,
    /// Credential hash and second-factor setting.
    Authentication,
}

impl AttestationKind {
    pub const ALL: [Self; 4] = [
        Self::GovernmentId,
        Self::Biometric,
        Self::Consent,
        Self::Authentication,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GovernmentId => "government_id",
            Self::Biometric => "biometric",
            Self::Consent => "consent",
            Self::Authentication => "authentication",
        }
    }
}

impl fmt::Display for AttestationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
