//! Account identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// An opaque, globally unique reference to a participant.
///
/// Accounts derived from Ed25519 public keys carry the `vdao_` prefix, and
/// contract custody accounts carry `vdao_contract_`. Any non-empty string is
/// accepted though: the registry stores references, it does not interpret them.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Prefix of accounts derived from public keys.
    pub const PREFIX: &'static str = "vdao_";

    /// Prefix of accounts owned by a deployed contract.
    pub const CONTRACT_PREFIX: &'static str = "vdao_contract_";

    /// Wrap a raw identifier without validation.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Wrap a raw identifier, rejecting empty or whitespace-only strings.
    pub fn parse(raw: impl Into<String>) -> Result<Self, TypesError> {
        let id = Self(raw.into());
        if id.is_valid() {
            Ok(id)
        } else {
            Err(TypesError::EmptyAccount)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An identifier is valid when it is present, i.e. non-blank.
    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty()
    }

    /// Whether this account belongs to a deployed contract.
    pub fn is_contract(&self) -> bool {
        self.0.starts_with(Self::CONTRACT_PREFIX)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
