//! Bootstrap routine for a veridao deployment.
//!
//! Deploys the `IdentityToken` value ledger with its initial supply, then an
//! `IdentityVerificationDao` bound to it, and reports both identifiers.

pub mod bootstrap;
pub mod config;
pub mod error;

pub use bootstrap::{deploy, run, DeployReceipt, Deployment};
pub use config::DeployConfig;
pub use error::DeployError;
