use crate::error::{Result, WalletError};
use crate::utils::curve25519::{self, PUBLIC_KEY_LEN, SIGNATURE_LEN, SIGNATURE_RANDOM_LEN};
use crate::utils::{base58_decode, base58_encode, hash_chain, int_to_bytes, sha256_digest};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Nonce prepended to the seed bytes; always zero for the first account
pub const INITIAL_NONCE: u32 = 0;

/// Prepend the four-byte little-endian nonce to the seed bytes
pub fn append_nonce(seed_bytes: &[u8]) -> Zeroizing<Vec<u8>> {
    let mut data = Zeroizing::new(Vec::with_capacity(seed_bytes.len() + 4));
    data.extend_from_slice(&int_to_bytes(INITIAL_NONCE));
    data.extend_from_slice(seed_bytes);
    data
}

/// `sha256(hash_chain(nonce ++ seed_bytes))`, the seed of the account keypair
pub fn build_account_seed_hash(seed_bytes: &[u8]) -> Zeroizing<[u8; 32]> {
    let data = append_nonce(seed_bytes);
    let seed_hash = Zeroizing::new(hash_chain(&data));
    Zeroizing::new(sha256_digest(&seed_hash[..]))
}

/// Account keypair. The private half is wiped when the value is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    public_key: [u8; 32],
    private_key: [u8; 32],
}

impl KeyPair {
    pub fn from_seed_bytes(seed_bytes: &[u8]) -> KeyPair {
        let account_seed_hash = build_account_seed_hash(seed_bytes);
        let (public_key, private_key) = curve25519::generate_key_pair(&account_seed_hash);
        KeyPair {
            public_key,
            private_key,
        }
    }

    pub fn from_seed_phrase(seed_phrase: &str) -> KeyPair {
        Self::from_seed_bytes(seed_phrase.as_bytes())
    }

    pub fn public_key(&self) -> &[u8; 32] {
        &self.public_key
    }

    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    pub fn public_key_base58(&self) -> String {
        base58_encode(&self.public_key)
    }

    pub fn private_key_base58(&self) -> String {
        base58_encode(&self.private_key)
    }

    pub fn address(&self) -> String {
        super::address::encode_address(&self.public_key)
    }

    pub fn sign(
        &self,
        message: &[u8],
        random: &[u8; SIGNATURE_RANDOM_LEN],
    ) -> [u8; SIGNATURE_LEN] {
        curve25519::sign(&self.private_key, message, random)
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key_base58())
            .finish_non_exhaustive()
    }
}

pub fn build_public_key(seed_bytes: &[u8]) -> String {
    KeyPair::from_seed_bytes(seed_bytes).public_key_base58()
}

pub fn build_private_key(seed_bytes: &[u8]) -> String {
    KeyPair::from_seed_bytes(seed_bytes).private_key_base58()
}

pub fn raw_public_key(seed_bytes: &[u8]) -> [u8; 32] {
    *KeyPair::from_seed_bytes(seed_bytes).public_key()
}

pub fn get_public_key(seed_phrase: &str) -> String {
    build_public_key(seed_phrase.as_bytes())
}

pub fn get_private_key(seed_phrase: &str) -> String {
    build_private_key(seed_phrase.as_bytes())
}

/// Base58 public key to its 32 raw bytes
pub fn decode_public_key(public_key: &str) -> Result<[u8; PUBLIC_KEY_LEN]> {
    let bytes = base58_decode(public_key)
        .map_err(|e| WalletError::InvalidKey(format!("Missing or invalid public key: {e}")))?;
    to_key_bytes(&bytes)
}

pub(crate) fn to_key_bytes(bytes: &[u8]) -> Result<[u8; PUBLIC_KEY_LEN]> {
    bytes.try_into().map_err(|_| {
        WalletError::InvalidKey(format!(
            "Missing or invalid public key: expected {PUBLIC_KEY_LEN} bytes, got {}",
            bytes.len()
        ))
    })
}
