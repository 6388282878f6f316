//! Fundamental types for veridao.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! account identifiers, attestation kinds, value amounts, timestamps and clocks, contract identifiers,
//! network ids and key material.

pub mod account;
pub mod attestation;
pub mod amount;
pub mod contract;
pub mod error;
pub mod keys;
pub mod network;
pub mod time;

pub use account::AccountId;
pub use attestation::AttestationKind;
pub use amount::ValueAmount;
pub use contract::ContractId;
pub use error::TypesError;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use network::NetworkId;
pub use time::{Clock, SystemClock, Timestamp};
