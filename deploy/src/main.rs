//! veridao-deploy: deploys the identity token and the identity-verification DAO.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use veridao_core::ReleasePolicy;
use veridao_deploy::{DeployConfig, DeployReceipt};
use veridao_types::{NetworkId, SystemClock};
use veridao_utils::{init_logging, init_tracing, LogFormat};

#[derive(Parser)]
#[command(name = "veridao-deploy", about = "Deploy the veridao token ledger and DAO")]
struct Cli {
    /// Path to a TOML configuration file. CLI flags and env vars override it.
    #[arg(long, env = "VERIDAO_CONFIG")]
    config: Option<PathBuf>,

    /// Network: "live", "test" or "dev".
    #[arg(long, env = "VERIDAO_NETWORK")]
    network: Option<NetworkId>,

    /// Initial token supply in whole units.
    #[arg(long, env = "VERIDAO_INITIAL_SUPPLY")]
    initial_supply: Option<u64>,

    /// Hex-encoded 32-byte deployer seed.
    #[arg(long, env = "VERIDAO_DEPLOYER_SEED", hide_env_values = true)]
    deployer_seed: Option<String>,

    /// Enforce escrow release times instead of treating them as advisory.
    #[arg(long, env = "VERIDAO_ENFORCE_RELEASE_TIME")]
    enforce_release_time: bool,

    /// Write the DAO snapshot to this file after deployment.
    #[arg(long, env = "VERIDAO_SNAPSHOT_OUT")]
    snapshot_out: Option<PathBuf>,

    /// Log format: "human" or "json".
    #[arg(long, env = "VERIDAO_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log level filter, e.g. "info" or "debug".
    #[arg(long, env = "VERIDAO_LOG_LEVEL")]
    log_level: Option<String>,
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<DeployConfig> {
        let mut config = match &self.config {
            Some(path) => DeployConfig::from_toml_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => DeployConfig::default(),
        };
        if let Some(network) = self.network {
            config.network = network;
        }
        if let Some(supply) = self.initial_supply {
            config.initial_supply = supply;
        }
        if let Some(seed) = &self.deployer_seed {
            config.deployer_seed = Some(seed.clone());
        }
        if self.enforce_release_time {
            config.dao.release_policy = ReleasePolicy::Enforced;
        }
        if let Some(path) = &self.snapshot_out {
            config.snapshot_out = Some(path.clone());
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        Ok(config)
    }
}

fn deploy(config: &DeployConfig) -> anyhow::Result<DeployReceipt> {
    let receipt = veridao_deploy::run(config, Arc::new(SystemClock)).context("deployment failed")?;
    Ok(receipt)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            init_tracing();
            tracing::error!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.log_format, &config.log_level) {
        init_tracing();
        tracing::error!("{e}");
        return ExitCode::FAILURE;
    }
    tracing::debug!(?config, "configuration resolved");

    let receipt = match deploy(&config) {
        Ok(receipt) => receipt,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&receipt) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("failed to render receipt: {e}");
            ExitCode::FAILURE
        }
    }
}
