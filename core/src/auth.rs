//! Resolving the acting account at the boundary.
//!
//! A client proves control of an Ed25519 key by signing a challenge. The
//! signed message is bound to one DAO instance, so a signature produced for
//! one deployment is useless against another. A successful check yields a
//! [`Caller`] which derefs to the `vdao_` account derived from the key.

use std::ops::Deref;
use thiserror::Error;
use veridao_crypto::{derive_account, sign_message, verify_signature};
use veridao_types::{AccountId, ContractId, KeyPair, PublicKey, Signature};

const DOMAIN_TAG: &[u8] = b"veridao-auth-v1";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("signature does not verify for {0}")]
    InvalidCredential(String),

    #[error("challenge must not be empty")]
    EmptyChallenge,
}

/// An authenticated account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Caller(AccountId);

impl Caller {
    pub fn account(&self) -> &AccountId {
        &self.0
    }
}

impl Deref for Caller {
    type Target = AccountId;

    fn deref(&self) -> &AccountId {
        &self.0
    }
}

impl AsRef<AccountId> for Caller {
    fn as_ref(&self) -> &AccountId {
        &self.0
    }
}

/// Challenge/response authentication against one DAO.
#[derive(Clone, Copy, Debug)]
pub struct Session {
    dao: ContractId,
}

impl Session {
    pub fn new(dao: ContractId) -> Self {
        Self { dao }
    }

    /// The exact bytes a client must sign for `challenge`.
    pub fn challenge_message(&self, challenge: &[u8]) -> Vec<u8> {
        let mut message = Vec::with_capacity(DOMAIN_TAG.len() + 32 + challenge.len());
        message.extend_from_slice(DOMAIN_TAG);
        message.extend_from_slice(self.dao.as_bytes());
        message.extend_from_slice(challenge);
        message
    }

    /// Client side: sign `challenge` for this DAO.
    pub fn sign(&self, keypair: &KeyPair, challenge: &[u8]) -> Signature {
        sign_message(&self.challenge_message(challenge), &keypair.private)
    }

    pub fn authenticate(
        &self,
        public_key: &PublicKey,
        challenge: &[u8],
        signature: &Signature,
    ) -> Result<Caller, AuthError> {
        if challenge.is_empty() {
            return Err(AuthError::EmptyChallenge);
        }
        let account = derive_account(public_key);
        if !verify_signature(&self.challenge_message(challenge), signature, public_key) {
            tracing::warn!(%account, "authentication failed");
            return Err(AuthError::InvalidCredential(account.to_string()));
        }
        tracing::debug!(%account, "caller authenticated");
        Ok(Caller(account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veridao_crypto::keypair_from_seed;

    #[test]
    fn valid_signature_yields_derived_account() {
        let kp = keypair_from_seed(&[11u8; 32]);
        let session = Session::new(ContractId::new([1u8; 32]));
        let sig = session.sign(&kp, b"nonce-1");

        let caller = session.authenticate(&kp.public, b"nonce-1", &sig).unwrap();
        assert_eq!(caller.account(), &derive_account(&kp.public));
        assert!(caller.as_str().starts_with("vdao_"));
    }

    #[test]
    fn forged_signature_rejected() {
        let kp = keypair_from_seed(&[11u8; 32]);
        let other = keypair_from_seed(&[12u8; 32]);
        let session = Session::new(ContractId::new([1u8; 32]));
        let sig = session.sign(&other, b"nonce-1");

        let err = session.authenticate(&kp.public, b"nonce-1", &sig).unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredential(_)));
    }

    #[test]
    fn signature_bound_to_challenge_and_dao() {
        let kp = keypair_from_seed(&[5u8; 32]);
        let session_a = Session::new(ContractId::new([1u8; 32]));
        let session_b = Session::new(ContractId::new([2u8; 32]));
        let sig = session_a.sign(&kp, b"nonce-1");

        assert!(session_a.authenticate(&kp.public, b"nonce-2", &sig).is_err());
        assert!(session_b.authenticate(&kp.public, b"nonce-1", &sig).is_err());
    }

    #[test]
    fn empty_challenge_rejected() {
        let kp = keypair_from_seed(&[5u8; 32]);
        let session = Session::new(ContractId::ZERO);
        let sig = session.sign(&kp, b"");
        assert_eq!(
            session.authenticate(&kp.public, b"", &sig),
            Err(AuthError::EmptyChallenge)
        );
    }
}
