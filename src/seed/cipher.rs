use crate::config::{Config, KdfSettings};
use crate::error::{Result, WalletError};
use crate::utils::{deserialize, random_bytes, serialize, OsRandom, RandomSource};
use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use data_encoding::BASE64;
use serde::{Deserialize, Serialize};
use zeroize::{ZeroizeOnDrop, Zeroizing};

const ENVELOPE_VERSION: u8 = 1;
const KEY_LEN: usize = 32;
const SALT_LEN: usize = 16;
const NONCE_LEN: usize = 12;
/// Upper bounds on the Argon2 cost an envelope may ask for
const MAX_MEMORY_KIB: u32 = 1024 * 1024;
const MAX_ITERATIONS: u32 = 64;
const MAX_PARALLELISM: u32 = 16;
/// Largest plaintext accepted for sealing
const MAX_PLAINTEXT_LEN: usize = 8 * 1024;
/// Largest encoded envelope accepted for opening: the plaintext bound plus
/// the GCM tag, salt, nonce and header fields
const MAX_ENVELOPE_LEN: usize = MAX_PLAINTEXT_LEN + 256;

/// Password-based symmetric encryption that manages its own salt and IV.
///
/// The ciphertext is an opaque string; everything needed to decrypt it except
/// the passphrase travels inside.
pub trait PassphraseCipher: Send + Sync {
    fn encrypt(&self, plaintext: &[u8], passphrase: &str) -> Result<String>;

    fn decrypt(&self, ciphertext: &str, passphrase: &str) -> Result<Zeroizing<Vec<u8>>>;
}

/// Secure key wrapper that automatically zeros memory on drop
#[derive(Clone, ZeroizeOnDrop)]
pub struct SecureKey {
    key: Vec<u8>,
}

impl SecureKey {
    pub fn new(key: Vec<u8>) -> Self {
        Self { key }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl std::fmt::Debug for SecureKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureKey")
            .field("length", &self.key.len())
            .finish()
    }
}

/// Binary layout behind the Base64 ciphertext string
#[derive(Debug, Clone, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
struct SealedSeed {
    version: u8,
    memory_kib: u32,
    iterations: u32,
    parallelism: u32,
    salt: Vec<u8>,
    nonce: Vec<u8>,
    ciphertext: Vec<u8>,
}

/// Argon2id key derivation feeding AES-256-GCM
pub struct Aes256GcmCipher<R: RandomSource = OsRandom> {
    kdf: KdfSettings,
    random: R,
}

impl Aes256GcmCipher<OsRandom> {
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.kdf, OsRandom)
    }
}

impl Default for Aes256GcmCipher<OsRandom> {
    fn default() -> Self {
        Self::new(KdfSettings::default(), OsRandom)
    }
}

impl<R: RandomSource> Aes256GcmCipher<R> {
    pub fn new(kdf: KdfSettings, random: R) -> Self {
        Self { kdf, random }
    }

    pub fn kdf(&self) -> KdfSettings {
        self.kdf
    }

    /// Get cipher algorithm name
    pub fn algorithm_name() -> &'static str {
        "Argon2id + AES-256-GCM"
    }
}

fn check_kdf_bounds(kdf: &KdfSettings) -> Result<()> {
    if kdf.memory_kib > MAX_MEMORY_KIB {
        return Err(WalletError::Encryption(format!(
            "Argon2 memory of {} KiB exceeds {MAX_MEMORY_KIB} KiB",
            kdf.memory_kib
        )));
    }
    if kdf.iterations > MAX_ITERATIONS {
        return Err(WalletError::Encryption(format!(
            "Argon2 iterations {} exceed {MAX_ITERATIONS}",
            kdf.iterations
        )));
    }
    if kdf.parallelism > MAX_PARALLELISM {
        return Err(WalletError::Encryption(format!(
            "Argon2 parallelism {} exceeds {MAX_PARALLELISM}",
            kdf.parallelism
        )));
    }
    Ok(())
}

fn derive_key(passphrase: &str, salt: &[u8], kdf: &KdfSettings) -> Result<SecureKey> {
    use argon2::{Algorithm, Argon2, Params, Version};

    let params = Params::new(kdf.memory_kib, kdf.iterations, kdf.parallelism, Some(KEY_LEN))
        .map_err(|e| WalletError::Encryption(format!("Invalid Argon2 parameters: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = vec![0u8; KEY_LEN];
    argon2
        .hash_password_into(passphrase.as_bytes(), salt, &mut key)
        .map_err(|e| WalletError::Encryption(format!("Key derivation failed: {e}")))?;

    Ok(SecureKey::new(key))
}

fn aes_cipher(key: &SecureKey) -> Result<Aes256Gcm> {
    if key.len() != KEY_LEN {
        return Err(WalletError::Encryption(
            "AES-256-GCM requires a 32-byte key".to_string(),
        ));
    }
    Ok(Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes())))
}

impl<R: RandomSource> PassphraseCipher for Aes256GcmCipher<R> {
    fn encrypt(&self, plaintext: &[u8], passphrase: &str) -> Result<String> {
        if plaintext.len() > MAX_PLAINTEXT_LEN {
            return Err(WalletError::Encryption(format!(
                "Plaintext of {} bytes exceeds {MAX_PLAINTEXT_LEN}",
                plaintext.len()
            )));
        }
        check_kdf_bounds(&self.kdf)?;

        let salt = random_bytes(&self.random, SALT_LEN)?;
        let nonce = random_bytes(&self.random, NONCE_LEN)?;

        let key = derive_key(passphrase, &salt, &self.kdf)?;
        let ciphertext = aes_cipher(&key)?
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|e| WalletError::Encryption(format!("AES-256-GCM encryption failed: {e}")))?;

        let sealed = SealedSeed {
            version: ENVELOPE_VERSION,
            memory_kib: self.kdf.memory_kib,
            iterations: self.kdf.iterations,
            parallelism: self.kdf.parallelism,
            salt: salt.to_vec(),
            nonce: nonce.to_vec(),
            ciphertext,
        };
        Ok(BASE64.encode(&serialize(&sealed)?))
    }

    fn decrypt(&self, ciphertext: &str, passphrase: &str) -> Result<Zeroizing<Vec<u8>>> {
        let raw = BASE64
            .decode(ciphertext.trim().as_bytes())
            .map_err(|e| WalletError::Encryption(format!("Invalid ciphertext encoding: {e}")))?;
        let sealed: SealedSeed = deserialize::<_, MAX_ENVELOPE_LEN>(&raw)?;

        if sealed.version != ENVELOPE_VERSION {
            return Err(WalletError::Encryption(format!(
                "Unsupported envelope version {}",
                sealed.version
            )));
        }
        if sealed.nonce.len() != NONCE_LEN {
            return Err(WalletError::Encryption(
                "AES-256-GCM requires a 12-byte nonce".to_string(),
            ));
        }

        let kdf = KdfSettings {
            memory_kib: sealed.memory_kib,
            iterations: sealed.iterations,
            parallelism: sealed.parallelism,
        };
        check_kdf_bounds(&kdf)?;
        let key = derive_key(passphrase, &sealed.salt, &kdf)?;
        let plaintext = aes_cipher(&key)?
            .decrypt(Nonce::from_slice(&sealed.nonce), sealed.ciphertext.as_slice())
            .map_err(|e| WalletError::Encryption(format!("AES-256-GCM decryption failed: {e}")))?;

        Ok(Zeroizing::new(plaintext))
    }
}
