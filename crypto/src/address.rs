//! Account derivation from public keys.
//!
//! Format: `vdao_` + hex(public_key, 64 chars) + hex(checksum, 8 chars), where
//! the checksum is the first 4 bytes of Blake2b-256(public_key).

use veridao_types::{AccountId, PublicKey};

const PUBKEY_HEX_LEN: usize = 64;
const CHECKSUM_LEN: usize = 4;
const ENCODED_LEN: usize = PUBKEY_HEX_LEN + CHECKSUM_LEN * 2;

/// Derive the `vdao_` account for a public key.
pub fn derive_account(public_key: &PublicKey) -> AccountId {
    let checksum = &crate::blake2b_256(public_key.as_bytes())[..CHECKSUM_LEN];
    AccountId::new(format!(
        "{}{}{}",
        AccountId::PREFIX,
        hex::encode(public_key.as_bytes()),
        hex::encode(checksum)
    ))
}

/// Recover the public key bytes from a derived account.
///
/// Returns `None` for accounts that were not derived from a key, or whose
/// checksum does not match.
pub fn decode_account(account: &AccountId) -> Option<[u8; 32]> {
    let encoded = account.as_str().strip_prefix(AccountId::PREFIX)?;
    if encoded.len() != ENCODED_LEN {
        return None;
    }
    let (key_hex, checksum_hex) = encoded.split_at(PUBKEY_HEX_LEN);
    let key: [u8; 32] = hex::decode(key_hex).ok()?.try_into().ok()?;
    let checksum = hex::decode(checksum_hex).ok()?;
    if checksum[..] != crate::blake2b_256(&key)[..CHECKSUM_LEN] {
        return None;
    }
    Some(key)
}

pub fn validate_account(account: &AccountId) -> bool {
    decode_account(account).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::keypair_from_seed;

    #[test]
    fn derive_and_decode() {
        let kp = keypair_from_seed(&[7u8; 32]);
        let account = derive_account(&kp.public);
        assert!(account.as_str().starts_with("vdao_"));
        assert_eq!(account.as_str().len(), 5 + ENCODED_LEN);
        assert_eq!(decode_account(&account), Some(kp.public.0));
    }

    #[test]
    fn corrupted_checksum_rejected() {
        let kp = keypair_from_seed(&[9u8; 32]);
        let mut raw = derive_account(&kp.public).as_str().to_string();
        let last = raw.pop().unwrap();
        raw.push(if last == '0' { '1' } else { '0' });
        assert!(!validate_account(&AccountId::new(raw)));
    }

    #[test]
    fn opaque_accounts_do_not_decode() {
        assert!(!validate_account(&AccountId::new("alice")));
        assert!(!validate_account(&AccountId::new("vdao_short")));
    }

    #[test]
    fn different_keys_different_accounts() {
        let a = derive_account(&keypair_from_seed(&[1u8; 32]).public);
        let b = derive_account(&keypair_from_seed(&[2u8; 32]).public);
        assert_ne!(a, b);
    }
}
