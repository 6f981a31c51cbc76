use crate::error::{Result, WalletError};
use zeroize::Zeroizing;

/// Cryptographically strong randomness.
///
/// Implementations take `&self` and must be safe to share between threads;
/// the seed generator and the signer both draw from the same source.
pub trait RandomSource: Send + Sync {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()>;
}

/// Operating system randomness
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        use rand::RngCore;
        rand::rngs::OsRng
            .try_fill_bytes(dest)
            .map_err(|e| WalletError::Crypto(format!("Secure random source failed: {e}")))
    }
}

/// `length` random bytes in a buffer that is zeroed when dropped
pub fn random_bytes<R: RandomSource + ?Sized>(
    source: &R,
    length: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    let mut bytes = Zeroizing::new(vec![0u8; length]);
    source.fill_bytes(&mut bytes)?;
    Ok(bytes)
}
