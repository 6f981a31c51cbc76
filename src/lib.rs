//! # Waves Wallet Core - Deterministic Accounts, Signing and Seed Protection
//!
//! This is the cryptographic heart of a Waves wallet. When I come back to this
//! code, here's what I need to remember:
//!
//! ## What It Does
//! - **Seed Phrases**: Draws words from a dictionary using secure randomness
//! - **Key Derivation**: Seed phrase → account seed hash → curve25519 keypair
//! - **Addresses**: Version byte, network byte, key hash and checksum, in Base58
//! - **Signing**: Byte-exact transfer and exchange order payloads, signed with
//!   fresh randomness
//! - **Seed Encryption**: Password strengthening plus authenticated encryption
//!
//! ## How the Code Is Organized
//! - `utils/`: Hash chain, Base58, integer encodings, curve25519, randomness
//! - `account/`: Seed hash, keypair and address derivation
//! - `seed/`: Seed generation, dictionary and seed phrase encryption
//! - `core/`: Transfer and order payloads and the signer
//! - `api`: The [`WalletApi`] facade with configured defaults
//! - `config/`: Tunable defaults, loaded from TOML or the environment
//! - `error/`: The single [`WalletError`] type
//!
//! ## Things That Must Never Change
//! - `hash_chain` is blake2b-256 first, keccak-256 second
//! - Address layout is `[1, 'W', hash[..20], checksum[..4]]`
//! - Payload field order and integer encodings are fixed by the network
//!
//! Nothing here talks to a node or stores anything on disk. Signed objects
//! go back to the caller, who decides how to broadcast them.

pub mod account;
pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod seed;
pub mod utils;

#[cfg(test)]
pub mod testing;

// Re-export commonly used types for convenience
pub use account::{
    build_raw_address, build_raw_address_from_public_key, get_private_key, get_public_key,
    validate_address, KeyPair,
};
pub use api::WalletApi;
pub use config::{Config, KdfSettings, GLOBAL_CONFIG};
pub use core::{
    compare_assets, post_to_dex, send_asset, verify_signature, AssetPair, Order, OrderRequest,
    OrderType, TransferRequest, TransferTransaction,
};
pub use error::{Result, WalletError};
pub use seed::{
    decrypt_seed_phrase, encrypt_seed_phrase, generate_new_seed, get_encoded_seed,
    Aes256GcmCipher, Bip39English, Dictionary, PassphraseCipher,
};
pub use utils::{base58_decode, base58_encode, hash_chain, OsRandom, RandomSource};
