//! Account key derivation
//!
//! Seed phrase → account seed hash → curve25519 keypair → address. Every step
//! is deterministic; nothing here caches keys between calls.

pub mod address;
pub mod keys;

pub use address::{
    address_from_public_key_bytes, build_raw_address, build_raw_address_from_public_key,
    validate_address, ADDRESS_CHECK_SUM_LEN, ADDRESS_LEN, ADDRESS_VERSION, MAINNET_CHAIN_ID,
};
pub use keys::{
    append_nonce, build_account_seed_hash, build_private_key, build_public_key,
    decode_public_key, get_private_key, get_public_key, raw_public_key, KeyPair,
};
