use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use ring::digest::{Context, SHA256};
use sha3::Keccak256;

use crate::error::{Result, WalletError};
use std::time::{SystemTime, UNIX_EPOCH};

type Blake2b256 = Blake2b<U32>;

/// Milliseconds since the Unix epoch
pub fn current_timestamp() -> Result<u64> {
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| WalletError::Crypto(format!("System time error: {e}")))?
        .as_millis();

    u64::try_from(duration).map_err(|_| WalletError::Crypto("Timestamp overflow".to_string()))
}

pub fn sha256_digest(data: &[u8]) -> [u8; 32] {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    let mut out = [0u8; 32];
    out.copy_from_slice(digest.as_ref());
    out
}

pub fn blake2b256_digest(data: &[u8]) -> [u8; 32] {
    Blake2b256::digest(data).into()
}

pub fn keccak256_digest(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// `keccak256(blake2b256(data))`. The order is part of the address format.
pub fn hash_chain(data: &[u8]) -> [u8; 32] {
    keccak256_digest(&blake2b256_digest(data))
}

pub fn base58_encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

pub fn base58_decode(data: &str) -> Result<Vec<u8>> {
    Ok(bs58::decode(data).into_vec()?)
}
