//! Curve25519 keys with Ed25519-style signatures.
//!
//! Keys are Montgomery (X25519) keys. Signing converts the private scalar to
//! its Edwards form, signs with caller-supplied randomness mixed into the
//! nonce, and stores the sign bit of the Edwards public key in the top bit of
//! the signature so that verifiers holding only the Montgomery key can
//! recover it.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::montgomery::MontgomeryPoint;
use curve25519_dalek::scalar::Scalar;
use ring::digest::{Context, Digest, SHA512};
use zeroize::Zeroizing;

pub const PUBLIC_KEY_LEN: usize = 32;
pub const PRIVATE_KEY_LEN: usize = 32;
pub const SIGNATURE_LEN: usize = 64;
pub const SIGNATURE_RANDOM_LEN: usize = 64;

fn clamp(mut bytes: [u8; 32]) -> [u8; 32] {
    bytes[0] &= 248;
    bytes[31] &= 127;
    bytes[31] |= 64;
    bytes
}

fn scalar_from_digest(digest: Digest) -> Scalar {
    let mut wide = Zeroizing::new([0u8; 64]);
    wide.copy_from_slice(digest.as_ref());
    Scalar::from_bytes_mod_order_wide(&wide)
}

fn challenge(r: &CompressedEdwardsY, public: &CompressedEdwardsY, message: &[u8]) -> Scalar {
    let mut context = Context::new(&SHA512);
    context.update(r.as_bytes());
    context.update(public.as_bytes());
    context.update(message);
    scalar_from_digest(context.finish())
}

/// Derive `(public, private)` from a 32-byte seed. The private key is the
/// clamped seed; the public key is its Montgomery u-coordinate.
pub fn generate_key_pair(seed: &[u8; 32]) -> ([u8; PUBLIC_KEY_LEN], [u8; PRIVATE_KEY_LEN]) {
    let private = clamp(*seed);
    let scalar = Scalar::from_bytes_mod_order(private);
    let public = EdwardsPoint::mul_base(&scalar).to_montgomery().to_bytes();
    (public, private)
}

pub fn sign(
    private_key: &[u8; PRIVATE_KEY_LEN],
    message: &[u8],
    random: &[u8; SIGNATURE_RANDOM_LEN],
) -> [u8; SIGNATURE_LEN] {
    let clamped = Zeroizing::new(clamp(*private_key));
    let secret = Scalar::from_bytes_mod_order(*clamped);
    let edwards_public = EdwardsPoint::mul_base(&secret).compress();
    let sign_bit = edwards_public.as_bytes()[31] & 0x80;

    let mut context = Context::new(&SHA512);
    context.update(&[0xfe]);
    context.update(&[0xff; 31]);
    context.update(&clamped[..]);
    context.update(message);
    context.update(random);
    let nonce = scalar_from_digest(context.finish());
    let r = EdwardsPoint::mul_base(&nonce).compress();

    let h = challenge(&r, &edwards_public, message);
    let s = nonce + h * secret;

    let mut signature = [0u8; SIGNATURE_LEN];
    signature[..32].copy_from_slice(r.as_bytes());
    signature[32..].copy_from_slice(s.as_bytes());
    signature[63] |= sign_bit;
    signature
}

pub fn verify(
    public_key: &[u8; PUBLIC_KEY_LEN],
    message: &[u8],
    signature: &[u8; SIGNATURE_LEN],
) -> bool {
    let sign_bit = (signature[63] & 0x80) >> 7;
    let Some(edwards_public) = MontgomeryPoint(*public_key).to_edwards(sign_bit) else {
        return false;
    };

    let mut r_bytes = [0u8; 32];
    r_bytes.copy_from_slice(&signature[..32]);
    let mut s_bytes = [0u8; 32];
    s_bytes.copy_from_slice(&signature[32..]);
    s_bytes[31] &= 0x7f;

    let s: Option<Scalar> = Scalar::from_canonical_bytes(s_bytes).into();
    let Some(s) = s else {
        return false;
    };

    let r = CompressedEdwardsY(r_bytes);
    let h = challenge(&r, &edwards_public.compress(), message);
    let recovered = EdwardsPoint::vartime_double_scalar_mul_basepoint(&h, &(-edwards_public), &s);
    recovered.compress() == r
}
