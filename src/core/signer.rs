use crate::account::{decode_public_key, KeyPair};
use crate::error::Result;
use crate::utils::curve25519::{self, SIGNATURE_LEN, SIGNATURE_RANDOM_LEN};
use crate::utils::{base58_decode, base58_encode, RandomSource};
use zeroize::Zeroizing;

/// Sign `message` with fresh 64-byte randomness; Base58 signature
pub fn sign_bytes<R: RandomSource + ?Sized>(
    key_pair: &KeyPair,
    message: &[u8],
    random: &R,
) -> Result<String> {
    let mut randomness = Zeroizing::new([0u8; SIGNATURE_RANDOM_LEN]);
    random.fill_bytes(&mut randomness[..])?;
    Ok(base58_encode(&key_pair.sign(message, &randomness)))
}

/// Check a Base58 signature against a Base58 public key.
///
/// A malformed public key is an error; a malformed signature simply does not
/// verify.
pub fn verify_signature(public_key: &str, message: &[u8], signature: &str) -> Result<bool> {
    let public_key = decode_public_key(public_key)?;
    let Ok(signature) = base58_decode(signature) else {
        return Ok(false);
    };
    let Ok(signature) = <[u8; SIGNATURE_LEN]>::try_from(signature.as_slice()) else {
        return Ok(false);
    };
    Ok(curve25519::verify(&public_key, message, &signature))
}
