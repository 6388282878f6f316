//! Cryptographic primitives for veridao.
//!
//! - **Ed25519** for caller keys and challenge signatures
//! - **Blake2b** for hashing (snapshot integrity, address checksums)
//! - Account derivation with the `vdao_` prefix

pub mod address;
pub mod hash;
pub mod keys;
pub mod sign;

pub use address::{decode_account, derive_account, validate_account};
pub use hash::{blake2b_256, blake2b_256_multi};
pub use keys::{keypair_from_seed, keypair_from_seed_hex, public_from_private, KeyError};
pub use sign::{sign_message, verify_signature};
