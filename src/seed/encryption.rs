//! Seed phrase protection at rest.
//!
//! The password is strengthened by repeated hashing before it reaches the
//! cipher. On the way back every failure collapses into
//! [`WalletError::WrongPassword`] so a caller cannot tell a corrupted
//! ciphertext from a bad password.

use super::cipher::PassphraseCipher;
use crate::error::{Result, WalletError};
use crate::utils::sha256_digest;
use zeroize::Zeroizing;

pub const MIN_SEED_WORDS: usize = 15;
pub const WEAK_PASSWORD_LEN: usize = 8;
pub const MIN_RECOMMENDED_ROUNDS: u32 = 1000;

fn word_count(phrase: &str) -> usize {
    phrase.split_whitespace().count()
}

/// Replace the password with the lowercase hex of its SHA-256, `rounds` times
pub fn strengthen_password(password: &str, rounds: u32) -> Zeroizing<String> {
    let mut current = Zeroizing::new(password.to_string());
    for _ in 0..rounds {
        let digest = Zeroizing::new(sha256_digest(current.as_bytes()));
        current = Zeroizing::new(hex::encode(*digest));
    }
    current
}

pub fn encrypt_seed_phrase<C: PassphraseCipher + ?Sized>(
    cipher: &C,
    seed_phrase: &str,
    password: &str,
    rounds: u32,
) -> Result<String> {
    if !password.is_empty() && password.chars().count() < WEAK_PASSWORD_LEN {
        log::warn!("Your password may be too weak");
    }
    if rounds < MIN_RECOMMENDED_ROUNDS {
        log::warn!("Encryption rounds may be too few");
    }

    let words = word_count(seed_phrase);
    if words < MIN_SEED_WORDS {
        return Err(WalletError::Validation(format!(
            "The seed phrase you are trying to encrypt is too short: {words} words, need at least {MIN_SEED_WORDS}"
        )));
    }
    if password.is_empty() {
        return Err(WalletError::InvalidArgument(
            "Password is required".to_string(),
        ));
    }

    let key = strengthen_password(password, rounds);
    let encrypted = cipher.encrypt(seed_phrase.as_bytes(), &key)?;
    log::debug!("Encrypted a {words}-word seed phrase with {rounds} strengthening rounds");
    Ok(encrypted)
}

pub fn decrypt_seed_phrase<C: PassphraseCipher + ?Sized>(
    cipher: &C,
    encrypted_seed: &str,
    password: &str,
    rounds: u32,
) -> Result<String> {
    if encrypted_seed.is_empty() {
        return Err(WalletError::InvalidArgument(
            "Encrypted seed is required".to_string(),
        ));
    }
    if password.is_empty() {
        return Err(WalletError::InvalidArgument(
            "Password is required".to_string(),
        ));
    }

    let key = strengthen_password(password, rounds);
    let plaintext = cipher.decrypt(encrypted_seed, &key).map_err(|_| {
        log::debug!("Seed phrase decryption failed");
        WalletError::WrongPassword
    })?;

    let phrase = std::str::from_utf8(&plaintext).map_err(|_| WalletError::WrongPassword)?;
    if phrase.is_empty() || word_count(phrase) < MIN_SEED_WORDS {
        return Err(WalletError::WrongPassword);
    }

    Ok(phrase.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Aes256GcmCipher;
    use crate::testing::{fast_kdf, TEST_SEED};
    use crate::utils::OsRandom;

    fn cipher() -> Aes256GcmCipher {
        Aes256GcmCipher::new(fast_kdf(), OsRandom)
    }

    /// Hands the plaintext back untouched so the post-decryption checks can
    /// be exercised directly.
    struct PassthroughCipher;

    impl PassphraseCipher for PassthroughCipher {
        fn encrypt(&self, plaintext: &[u8], _passphrase: &str) -> Result<String> {
            Ok(String::from_utf8_lossy(plaintext).into_owned())
        }

        fn decrypt(&self, ciphertext: &str, _passphrase: &str) -> Result<Zeroizing<Vec<u8>>> {
            Ok(Zeroizing::new(ciphertext.as_bytes().to_vec()))
        }
    }

    #[test]
    fn test_strengthen_password() {
        assert_eq!(strengthen_password("pw", 0).as_str(), "pw");
        assert_eq!(
            strengthen_password("abc", 1).as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            strengthen_password("test_password", 1000).as_str(),
            "73bfddafd22050eaa657a79f69ef47ee0dd7909732a8ffef2ff504b9ed456bce"
        );
    }

    #[test]
    fn test_round_trip() {
        let cipher = cipher();
        let encrypted = encrypt_seed_phrase(&cipher, TEST_SEED, "test_password", 1000).unwrap();
        assert_ne!(encrypted, TEST_SEED);

        let decrypted = decrypt_seed_phrase(&cipher, &encrypted, "test_password", 1000).unwrap();
        assert_eq!(decrypted, TEST_SEED);
    }

    #[test]
    fn test_wrong_password() {
        let cipher = cipher();
        let encrypted = encrypt_seed_phrase(&cipher, TEST_SEED, "test_password", 1000).unwrap();
        let result = decrypt_seed_phrase(&cipher, &encrypted, "other_password", 1000);
        assert_eq!(result, Err(WalletError::WrongPassword));
    }

    #[test]
    fn test_rounds_must_match() {
        let cipher = cipher();
        let encrypted = encrypt_seed_phrase(&cipher, TEST_SEED, "test_password", 1000).unwrap();
        let result = decrypt_seed_phrase(&cipher, &encrypted, "test_password", 999);
        assert_eq!(result, Err(WalletError::WrongPassword));
    }

    #[test]
    fn test_corrupted_ciphertext_is_wrong_password() {
        let cipher = cipher();
        let result = decrypt_seed_phrase(&cipher, "garbage", "test_password", 10);
        assert_eq!(result, Err(WalletError::WrongPassword));
    }

    #[test]
    fn test_hostile_envelopes_are_wrong_password() {
        use data_encoding::BASE64;

        // a salt length prefix claiming 2^40 bytes
        let mut raw = vec![1u8, 64, 1, 1, 0xFD];
        raw.extend_from_slice(&(1u64 << 40).to_le_bytes());
        let result = decrypt_seed_phrase(&cipher(), &BASE64.encode(&raw), "pw", 1);
        assert_eq!(result, Err(WalletError::WrongPassword));

        // version 1, 8 KiB, u32::MAX iterations, empty salt, zero nonce, empty ciphertext
        let mut raw = vec![1u8, 8, 0xFC, 0xFF, 0xFF, 0xFF, 0xFF, 1, 0, 12];
        raw.extend_from_slice(&[0; 12]);
        raw.push(0);
        let result = decrypt_seed_phrase(&cipher(), &BASE64.encode(&raw), "pw", 1);
        assert_eq!(result, Err(WalletError::WrongPassword));
    }

    #[test]
    fn test_short_seed_is_rejected_before_cipher() {
        struct UnreachableCipher;
        impl PassphraseCipher for UnreachableCipher {
            fn encrypt(&self, _: &[u8], _: &str) -> Result<String> {
                panic!("cipher must not run for a short seed");
            }
            fn decrypt(&self, _: &str, _: &str) -> Result<Zeroizing<Vec<u8>>> {
                panic!("cipher must not run for a short seed");
            }
        }

        let fourteen = "a b c d e f g h i j k l m n";
        let result = encrypt_seed_phrase(&UnreachableCipher, fourteen, "test_password", 1000);
        assert!(matches!(result, Err(WalletError::Validation(_))));

        let result = encrypt_seed_phrase(&UnreachableCipher, "", "test_password", 1000);
        assert!(matches!(result, Err(WalletError::Validation(_))));
    }

    #[test]
    fn test_weak_settings_only_warn() {
        let cipher = cipher();
        let encrypted = encrypt_seed_phrase(&cipher, TEST_SEED, "short", 3).unwrap();
        assert_eq!(
            decrypt_seed_phrase(&cipher, &encrypted, "short", 3).unwrap(),
            TEST_SEED
        );
    }

    #[test]
    fn test_missing_arguments() {
        let cipher = cipher();
        assert!(matches!(
            encrypt_seed_phrase(&cipher, TEST_SEED, "", 1000),
            Err(WalletError::InvalidArgument(_))
        ));
        assert!(matches!(
            decrypt_seed_phrase(&cipher, "", "pw", 1000),
            Err(WalletError::InvalidArgument(_))
        ));
        assert!(matches!(
            decrypt_seed_phrase(&cipher, "abc", "", 1000),
            Err(WalletError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_implausible_plaintext_is_wrong_password() {
        let short = decrypt_seed_phrase(&PassthroughCipher, "only three words", "pw", 1);
        assert_eq!(short, Err(WalletError::WrongPassword));

        let blank = decrypt_seed_phrase(&PassthroughCipher, "               ", "pw", 1);
        assert_eq!(blank, Err(WalletError::WrongPassword));

        let plausible = decrypt_seed_phrase(&PassthroughCipher, TEST_SEED, "pw", 1);
        assert_eq!(plausible.unwrap(), TEST_SEED);
    }
}
