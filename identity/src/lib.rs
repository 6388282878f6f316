//! Per-account identity attestations.
//!
//! The registry stores references (document numbers, image URIs, credential
//! hashes) exactly as submitted. Nothing here verifies the artifacts behind
//! them.

pub mod records;
pub mod registry;

pub use records::{
    AuthenticationData, BiometricData, ConsentAuthorization, GovernmentIdentification,
    IdentityProfile,
};
pub use registry::IdentityRegistry;
