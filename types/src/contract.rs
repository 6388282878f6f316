//! Identifiers of deployed contracts (the value ledger and the DAO itself).

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::account::AccountId;
use crate::error::TypesError;
use crate::network::NetworkId;

/// A 32-byte contract identifier.
///
/// Derived deterministically as Blake2b-256(network ‖ deployer ‖ nonce), so the
/// same deployer deploying in the same order on the same network always gets
/// the same identifiers.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContractId([u8; 32]);

impl ContractId {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn derive(network: NetworkId, deployer: &AccountId, nonce: u64) -> Self {
        let mut hasher = Blake2b::<U32>::new();
        hasher.update(network.as_str().as_bytes());
        hasher.update(deployer.as_str().as_bytes());
        hasher.update(nonce.to_le_bytes());
        let mut out = [0u8; 32];
        out.copy_from_slice(&hasher.finalize());
        Self(out)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The account that holds value on behalf of this contract.
    pub fn custody_account(&self) -> AccountId {
        AccountId::new(format!("{}{}", AccountId::CONTRACT_PREFIX, self))
    }
}

impl fmt::Debug for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContractId({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for ContractId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| TypesError::InvalidHex(e.to_string()))?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|v: Vec<u8>| TypesError::InvalidLength {
                expected: 32,
                actual: v.len(),
            })?;
        Ok(Self(arr))
    }
}
