//! DAO configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;
use veridao_escrow::ReleasePolicy;

use crate::DaoError;

/// Runtime configuration for an [`IdentityVerificationDao`](crate::IdentityVerificationDao).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaoConfig {
    /// Whether an escrow's release time is a hard lower bound for release.
    #[serde(default)]
    pub release_policy: ReleasePolicy,
}

impl DaoConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, DaoError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| DaoError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, DaoError> {
        toml::from_str(s).map_err(|e| DaoError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, DaoError> {
        toml::to_string_pretty(self).map_err(|e| DaoError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn empty_toml_is_advisory() {
        let config = DaoConfig::from_toml_str("").unwrap();
        assert_eq!(config.release_policy, ReleasePolicy::Advisory);
    }

    #[test]
    fn enforced_policy_parses() {
        let config = DaoConfig::from_toml_str(r#"release_policy = "enforced""#).unwrap();
        assert_eq!(config.release_policy, ReleasePolicy::Enforced);
    }

    #[test]
    fn round_trips_through_toml() {
        let config = DaoConfig {
            release_policy: ReleasePolicy::Enforced,
        };
        let parsed = DaoConfig::from_toml_str(&config.to_toml_string().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn unknown_policy_is_config_error() {
        let err = DaoConfig::from_toml_str(r#"release_policy = "sometimes""#).unwrap_err();
        assert!(matches!(err, DaoError::Config(_)));
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = DaoConfig::from_toml_file("/nonexistent/veridao.toml").unwrap_err();
        assert!(matches!(err, DaoError::Config(_)));
    }
}
