//! Seed phrases: generation from secure randomness and a dictionary, and
//! password-based encryption for storage.
//!
//! Generation and encryption are independent of key derivation; a phrase
//! produced here is only a string until `account` turns it into keys.

pub mod cipher;
pub mod dictionary;
pub mod encryption;
pub mod generator;

pub use cipher::{Aes256GcmCipher, PassphraseCipher, SecureKey};
pub use dictionary::{Bip39English, Dictionary};
pub use encryption::{
    decrypt_seed_phrase, encrypt_seed_phrase, strengthen_password, MIN_SEED_WORDS,
};
pub use generator::{generate_new_seed, get_encoded_seed, word_index};
