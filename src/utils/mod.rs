//! Utility functions and helpers
//!
//! Hash primitives and their fixed composition, Base58, integer encodings,
//! the curve25519 signature primitive and the randomness interface.

pub mod bytes;
pub mod crypto;
pub mod curve25519;
pub mod random;
pub mod serialization;

pub use bytes::{bytes_with_size, concat_bytes, int_to_bytes, long_to_bytes, short_to_bytes};
pub use crypto::{
    base58_decode, base58_encode, blake2b256_digest, current_timestamp, hash_chain,
    keccak256_digest, sha256_digest,
};
pub use random::{random_bytes, OsRandom, RandomSource};
pub use serialization::{deserialize, serialize};
