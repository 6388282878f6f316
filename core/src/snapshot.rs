//! DAO snapshots: the complete registry state at a point in time.
//!
//! The hash is Blake2b-256 over the bincode encoding of every state field
//! except `hash` and `taken_at`. All maps are ordered by account, so two
//! DAOs holding the same state always hash the same.

use serde::{Deserialize, Serialize};
use std::path::Path;
use veridao_access::AccessControl;
use veridao_escrow::EscrowEngine;
use veridao_identity::IdentityRegistry;
use veridao_notify::EventLog;
use veridao_reputation::ReputationLedger;
use veridao_types::{ContractId, Timestamp};

use crate::{DaoConfig, DaoError};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaoSnapshot {
    pub version: u32,
    pub hash: [u8; 32],
    pub taken_at: Timestamp,
    /// The DAO's own identifier.
    pub id: ContractId,
    /// The value ledger the DAO was bound to.
    pub token: ContractId,
    pub config: DaoConfig,
    pub access: AccessControl,
    pub identity: IdentityRegistry,
    pub reputation: ReputationLedger,
    pub escrows: EscrowEngine,
    pub log: EventLog,
}

#[derive(Serialize)]
struct HashedState<'a> {
    version: u32,
    id: &'a ContractId,
    token: &'a ContractId,
    config: &'a DaoConfig,
    access: &'a AccessControl,
    identity: &'a IdentityRegistry,
    reputation: &'a ReputationLedger,
    escrows: &'a EscrowEngine,
    log: &'a EventLog,
}

impl DaoSnapshot {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn seal(
        taken_at: Timestamp,
        id: ContractId,
        token: ContractId,
        config: DaoConfig,
        access: AccessControl,
        identity: IdentityRegistry,
        reputation: ReputationLedger,
        escrows: EscrowEngine,
        log: EventLog,
    ) -> Result<Self, DaoError> {
        let mut snapshot = Self {
            version: SNAPSHOT_VERSION,
            hash: [0u8; 32],
            taken_at,
            id,
            token,
            config,
            access,
            identity,
            reputation,
            escrows,
            log,
        };
        snapshot.hash = snapshot.compute_hash()?;
        Ok(snapshot)
    }

    pub fn compute_hash(&self) -> Result<[u8; 32], DaoError> {
        let state = HashedState {
            version: self.version,
            id: &self.id,
            token: &self.token,
            config: &self.config,
            access: &self.access,
            identity: &self.identity,
            reputation: &self.reputation,
            escrows: &self.escrows,
            log: &self.log,
        };
        let bytes = bincode::serialize(&state).map_err(|e| DaoError::Snapshot(e.to_string()))?;
        Ok(veridao_crypto::blake2b_256(&bytes))
    }

    /// Whether the stored hash matches the state.
    pub fn verify(&self) -> bool {
        self.compute_hash().is_ok_and(|hash| hash == self.hash)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, DaoError> {
        bincode::serialize(self).map_err(|e| DaoError::Snapshot(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DaoError> {
        bincode::deserialize(bytes).map_err(|e| DaoError::Snapshot(e.to_string()))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DaoError> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DaoError> {
        Self::from_bytes(&std::fs::read(path)?)
    }

    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash)
    }
}
