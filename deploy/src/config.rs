//! Deployment configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use veridao_core::DaoConfig;
use veridao_types::NetworkId;
use veridao_utils::LogFormat;

use crate::DeployError;

/// Well-known development seed. Only accepted on [`NetworkId::Dev`].
pub const DEV_DEPLOYER_SEED: &str =
    "0101010101010101010101010101010101010101010101010101010101010101";

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    #[serde(default)]
    pub network: NetworkId,

    /// Whole token units minted to the deployer.
    #[serde(default = "default_initial_supply")]
    pub initial_supply: u64,

    /// Hex-encoded 32-byte Ed25519 seed of the deploying account.
    #[serde(default)]
    pub deployer_seed: Option<String>,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Filter directive, e.g. "info" or "debug,veridao_escrow=trace".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Where to write the DAO snapshot after deployment.
    #[serde(default)]
    pub snapshot_out: Option<PathBuf>,

    #[serde(default)]
    pub dao: DaoConfig,
}

fn default_initial_supply() -> u64 {
    1_000_000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl DeployConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, DeployError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| DeployError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, DeployError> {
        toml::from_str(s).map_err(|e| DeployError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, DeployError> {
        toml::to_string_pretty(self).map_err(|e| DeployError::Config(e.to_string()))
    }

    /// The seed to deploy with. Live and test networks need an explicit one.
    pub fn resolved_seed(&self) -> Result<&str, DeployError> {
        match (&self.deployer_seed, self.network) {
            (Some(seed), _) => Ok(seed.as_str()),
            (None, NetworkId::Dev) => Ok(DEV_DEPLOYER_SEED),
            (None, network) => Err(DeployError::Config(format!(
                "deployer_seed is required on the {network} network"
            ))),
        }
    }
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            network: NetworkId::default(),
            initial_supply: default_initial_supply(),
            deployer_seed: None,
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            snapshot_out: None,
            dao: DaoConfig::default(),
        }
    }
}

// Keeps the seed out of logs.
impl fmt::Debug for DeployConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeployConfig")
            .field("network", &self.network)
            .field("initial_supply", &self.initial_supply)
            .field(
                "deployer_seed",
                &self.deployer_seed.as_ref().map(|_| "<redacted>"),
            )
            .field("log_format", &self.log_format)
            .field("log_level", &self.log_level)
            .field("snapshot_out", &self.snapshot_out)
            .field("dao", &self.dao)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veridao_core::ReleasePolicy;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = DeployConfig::from_toml_str("").unwrap();
        assert_eq!(config, DeployConfig::default());
        assert_eq!(config.initial_supply, 1_000_000);
        assert_eq!(config.network, NetworkId::Dev);
        assert_eq!(config.dao.release_policy, ReleasePolicy::Advisory);
    }

    #[test]
    fn nested_dao_section_parses() {
        let toml = r#"
            network = "test"
            initial_supply = 500
            log_format = "json"

            [dao]
            release_policy = "enforced"
        "#;
        let config = DeployConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.network, NetworkId::Test);
        assert_eq!(config.initial_supply, 500);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.dao.release_policy, ReleasePolicy::Enforced);
    }

    #[test]
    fn round_trips_through_toml() {
        let config = DeployConfig {
            deployer_seed: Some(DEV_DEPLOYER_SEED.to_string()),
            snapshot_out: Some(PathBuf::from("/tmp/dao.snapshot")),
            ..DeployConfig::default()
        };
        let parsed = DeployConfig::from_toml_str(&config.to_toml_string().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn seed_required_off_dev() {
        let mut config = DeployConfig::default();
        assert_eq!(config.resolved_seed().unwrap(), DEV_DEPLOYER_SEED);
        config.network = NetworkId::Live;
        assert!(matches!(config.resolved_seed(), Err(DeployError::Config(_))));
    }

    #[test]
    fn debug_redacts_seed() {
        let config = DeployConfig {
            deployer_seed: Some("ab".repeat(32)),
            ..DeployConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains(&"ab".repeat(32)));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = DeployConfig::from_toml_file("/nonexistent/deploy.toml").unwrap_err();
        assert!(matches!(err, DeployError::Config(_)));
    }
}
