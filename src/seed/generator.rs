use super::dictionary::Dictionary;
use crate::error::{Result, WalletError};
use crate::utils::{base58_encode, random_bytes, sha256_digest, RandomSource};
use zeroize::Zeroizing;

/// Dictionary index for one pair of random bytes.
///
/// The two bytes are written as decimal text, hashed with SHA-256, and the
/// first 13 hex digits of the digest (its top 52 bits) are reduced modulo the
/// dictionary size.
pub fn word_index(first: u8, second: u8, dictionary_len: usize) -> usize {
    let text = Zeroizing::new(format!("{first}{second}"));
    let digest = Zeroizing::new(sha256_digest(text.as_bytes()));

    let mut prefix = Zeroizing::new([0u8; 8]);
    prefix[1..].copy_from_slice(&digest[..7]);
    let value = u64::from_be_bytes(*prefix) >> 4;

    (value % dictionary_len as u64) as usize
}

/// Draw a new `word_count`-word seed phrase.
///
/// Both random buffers are zeroed when they go out of scope, on success and
/// on error alike.
pub fn generate_new_seed<R, D>(word_count: usize, random: &R, dictionary: &D) -> Result<String>
where
    R: RandomSource + ?Sized,
    D: Dictionary + ?Sized,
{
    if word_count == 0 {
        return Err(WalletError::InvalidLength(
            "Missing or invalid array length".to_string(),
        ));
    }

    let words = dictionary.words();
    if words.is_empty() {
        return Err(WalletError::InvalidArgument(
            "Dictionary is empty".to_string(),
        ));
    }

    let first = random_bytes(random, word_count)?;
    let second = random_bytes(random, word_count)?;

    let phrase: Vec<&str> = first
        .iter()
        .zip(second.iter())
        .map(|(a, b)| words[word_index(*a, *b, words.len())])
        .collect();

    log::debug!("Generated a {word_count}-word seed phrase");
    Ok(phrase.join(" "))
}

/// Base58 of the seed phrase bytes
pub fn get_encoded_seed(seed: &str) -> String {
    base58_encode(seed.as_bytes())
}
