//! Ed25519 key derivation.

use ed25519_dalek::SigningKey;
use thiserror::Error;
use veridao_types::{KeyPair, PrivateKey, PublicKey};

#[derive(Debug, Error)]
pub enum KeyError {
    #[error("seed is not valid hex: {0}")]
    InvalidHex(String),

    #[error("seed must be 32 bytes, got {0}")]
    InvalidLength(usize),
}

/// Derive a key pair from a 32-byte seed (deterministic).
pub fn keypair_from_seed(seed: &[u8; 32]) -> KeyPair {
    let signing_key = SigningKey::from_bytes(seed);
    KeyPair {
        public: PublicKey(signing_key.verifying_key().to_bytes()),
        private: PrivateKey(signing_key.to_bytes()),
    }
}

/// Derive a key pair from a 64-character hex seed, as found in deploy configs.
pub fn keypair_from_seed_hex(seed_hex: &str) -> Result<KeyPair, KeyError> {
    let bytes = hex::decode(seed_hex.trim()).map_err(|e| KeyError::InvalidHex(e.to_string()))?;
    let seed: [u8; 32] = bytes
        .try_into()
        .map_err(|v: Vec<u8>| KeyError::InvalidLength(v.len()))?;
    Ok(keypair_from_seed(&seed))
}

/// Derive the public key from a private key.
pub fn public_from_private(private: &PrivateKey) -> PublicKey {
    PublicKey(SigningKey::from_bytes(&private.0).verifying_key().to_bytes())
}
