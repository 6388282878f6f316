//! Token and DAO deployment.

use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use veridao_core::IdentityVerificationDao;
use veridao_crypto::{derive_account, keypair_from_seed_hex};
use veridao_ledger::{TokenLedger, ValueLedger};
use veridao_types::{AccountId, Clock, ContractId, ValueAmount};

use crate::{DeployConfig, DeployError};

/// Deployment nonces of the deployer: the token first, then the DAO.
const TOKEN_NONCE: u64 = 0;
const DAO_NONCE: u64 = 1;

pub struct Deployment {
    pub deployer: AccountId,
    pub dao: IdentityVerificationDao<TokenLedger>,
}

/// Machine-readable summary printed after a successful deployment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeployReceipt {
    pub network: String,
    pub deployer: String,
    pub token_id: String,
    pub token_name: String,
    pub token_symbol: String,
    pub total_supply: String,
    pub dao_id: String,
    pub custody_account: String,
    pub release_policy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_hash: Option<String>,
}

/// Deploy the token ledger and the DAO.
pub fn deploy(config: &DeployConfig, clock: Arc<dyn Clock>) -> Result<Deployment, DeployError> {
    let keypair = keypair_from_seed_hex(config.resolved_seed()?)?;
    let deployer = derive_account(&keypair.public);
    tracing::info!(network = %config.network, %deployer, "deploying");

    let token_id = ContractId::derive(config.network, &deployer, TOKEN_NONCE);
    let supply = ValueAmount::from_units(u128::from(config.initial_supply));
    let token = TokenLedger::new(token_id, &deployer, supply);
    tracing::info!("IdentityToken deployed to: {token_id}");

    let dao_id = ContractId::derive(config.network, &deployer, DAO_NONCE);
    let dao = IdentityVerificationDao::new(
        dao_id,
        deployer.clone(),
        token,
        clock,
        config.dao.clone(),
    )?;
    tracing::info!("IdentityVerificationDAO deployed to: {dao_id}");

    Ok(Deployment { deployer, dao })
}

impl Deployment {
    /// Write the DAO snapshot to `path`, returning its hash in hex.
    pub fn write_snapshot(&self, path: &Path) -> Result<String, DeployError> {
        let snapshot = self.dao.snapshot()?;
        snapshot.save(path)?;
        tracing::info!(path = %path.display(), hash = %snapshot.hash_hex(), "snapshot written");
        Ok(snapshot.hash_hex())
    }

    pub fn receipt(&self, config: &DeployConfig, snapshot_hash: Option<String>) -> DeployReceipt {
        let info = self.dao.ledger().info();
        DeployReceipt {
            network: config.network.to_string(),
            deployer: self.deployer.to_string(),
            token_id: self.dao.ledger().id().to_string(),
            token_name: info.name.clone(),
            token_symbol: info.symbol.clone(),
            total_supply: info.total_supply.to_string(),
            dao_id: self.dao.id().to_string(),
            custody_account: self.dao.custody_account().to_string(),
            release_policy: format!("{:?}", config.dao.release_policy).to_lowercase(),
            snapshot_hash,
        }
    }
}

/// Full bootstrap: deploy, optionally persist the snapshot, and summarise.
pub fn run(config: &DeployConfig, clock: Arc<dyn Clock>) -> Result<DeployReceipt, DeployError> {
    let deployment = deploy(config, clock)?;
    let snapshot_hash = match &config.snapshot_out {
        Some(path) => Some(deployment.write_snapshot(path)?),
        None => None,
    };
    Ok(deployment.receipt(config, snapshot_hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use veridao_core::{DaoSnapshot, ReleasePolicy};
    use veridao_nullables::NullClock;
    use veridao_types::NetworkId;

    fn clock() -> Arc<dyn Clock> {
        Arc::new(NullClock::new(1_700_000_000))
    }

    #[test]
    fn deployer_holds_initial_supply() {
        let config = DeployConfig::default();
        let deployment = deploy(&config, clock()).unwrap();
        let ledger = deployment.dao.ledger();
        assert_eq!(
            ledger.balance_of(&deployment.deployer),
            ValueAmount::from_units(1_000_000)
        );
        assert_eq!(ledger.info().symbol, "IDT");
        assert_eq!(deployment.dao.owner(), &deployment.deployer);
    }

    #[test]
    fn identifiers_are_deterministic_and_distinct() {
        let config = DeployConfig::default();
        let a = deploy(&config, clock()).unwrap();
        let b = deploy(&config, clock()).unwrap();
        assert_eq!(a.dao.id(), b.dao.id());
        assert_eq!(a.dao.token_id(), b.dao.token_id());
        assert_ne!(a.dao.id(), a.dao.token_id());

        let test_net = DeployConfig {
            network: NetworkId::Test,
            deployer_seed: Some("02".repeat(32)),
            ..DeployConfig::default()
        };
        let c = deploy(&test_net, clock()).unwrap();
        assert_ne!(a.dao.id(), c.dao.id());
    }

    #[test]
    fn bad_seed_fails() {
        let config = DeployConfig {
            deployer_seed: Some("not-hex".into()),
            ..DeployConfig::default()
        };
        assert!(matches!(deploy(&config, clock()), Err(DeployError::Key(_))));
    }

    #[test]
    fn run_writes_verifiable_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dao.snapshot");
        let config = DeployConfig {
            snapshot_out: Some(path.clone()),
            dao: veridao_core::DaoConfig {
                release_policy: ReleasePolicy::Enforced,
            },
            ..DeployConfig::default()
        };
        let receipt = run(&config, clock()).unwrap();

        let snapshot = DaoSnapshot::load(&path).unwrap();
        assert!(snapshot.verify());
        assert_eq!(receipt.snapshot_hash, Some(snapshot.hash_hex()));
        assert_eq!(receipt.dao_id, snapshot.id.to_string());
        assert_eq!(receipt.token_id, snapshot.token.to_string());
        assert_eq!(receipt.release_policy, "enforced");
        assert_eq!(receipt.total_supply, "1000000");
    }

    #[test]
    fn receipt_serialises_to_json() {
        let receipt = run(&DeployConfig::default(), clock()).unwrap();
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["token_name"], "IdentityToken");
        assert_eq!(json["network"], "dev");
        assert!(json.get("snapshot_hash").is_none());
    }
}
