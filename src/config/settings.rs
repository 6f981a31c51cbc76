use crate::error::{Result, WalletError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::str::FromStr;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(|| match Config::from_env() {
    Ok(config) => config,
    Err(e) => {
        log::warn!("Ignoring environment configuration: {e}");
        Config::default()
    }
});

pub const DEFAULT_ENCRYPTION_ROUNDS: u32 = 1000;
pub const DEFAULT_TRANSFER_FEE: u64 = 100_000;
/// Ten days in milliseconds
pub const DEFAULT_ORDER_TTL_MS: u64 = 10 * 86_400_000;

const ENCRYPTION_ROUNDS_KEY: &str = "WAVES_ENCRYPTION_ROUNDS";
const TRANSFER_FEE_KEY: &str = "WAVES_TRANSFER_FEE";
const ORDER_TTL_KEY: &str = "WAVES_ORDER_TTL_MS";
const KDF_MEMORY_KEY: &str = "WAVES_KDF_MEMORY_KIB";
const KDF_ITERATIONS_KEY: &str = "WAVES_KDF_ITERATIONS";
const KDF_PARALLELISM_KEY: &str = "WAVES_KDF_PARALLELISM";

/// Argon2id cost used by the seed cipher when sealing a new ciphertext
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KdfSettings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for KdfSettings {
    fn default() -> Self {
        Self {
            memory_kib: 19_456,
            iterations: 2,
            parallelism: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Strengthening rounds applied when the caller does not pass any
    pub encryption_rounds: u32,
    /// Fee placed into transfer payloads
    pub transfer_fee: u64,
    /// Offset added to an order timestamp to get its expiration
    pub order_ttl_ms: u64,
    pub kdf: KdfSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encryption_rounds: DEFAULT_ENCRYPTION_ROUNDS,
            transfer_fee: DEFAULT_TRANSFER_FEE,
            order_ttl_ms: DEFAULT_ORDER_TTL_MS,
            kdf: KdfSettings::default(),
        }
    }
}

impl Config {
    /// Defaults overridden by `WAVES_*` environment variables
    pub fn from_env() -> Result<Config> {
        let mut config = Config::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Config> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Config> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn apply_env(&mut self) -> Result<()> {
        if let Some(rounds) = read_env(ENCRYPTION_ROUNDS_KEY)? {
            self.encryption_rounds = rounds;
        }
        if let Some(fee) = read_env(TRANSFER_FEE_KEY)? {
            self.transfer_fee = fee;
        }
        if let Some(ttl) = read_env(ORDER_TTL_KEY)? {
            self.order_ttl_ms = ttl;
        }
        if let Some(memory) = read_env(KDF_MEMORY_KEY)? {
            self.kdf.memory_kib = memory;
        }
        if let Some(iterations) = read_env(KDF_ITERATIONS_KEY)? {
            self.kdf.iterations = iterations;
        }
        if let Some(parallelism) = read_env(KDF_PARALLELISM_KEY)? {
            self.kdf.parallelism = parallelism;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        if self.kdf.iterations == 0 || self.kdf.parallelism == 0 {
            return Err(WalletError::Config(
                "KDF iterations and parallelism must be positive".to_string(),
            ));
        }
        if self.kdf.memory_kib < 8 * self.kdf.parallelism {
            return Err(WalletError::Config(format!(
                "KDF memory must be at least {} KiB",
                8 * self.kdf.parallelism
            )));
        }
        Ok(())
    }
}

fn read_env<T: FromStr>(key: &str) -> Result<Option<T>> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| WalletError::Config(format!("{key} has an invalid value: {raw}"))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.encryption_rounds, 1000);
        assert_eq!(config.transfer_fee, 100_000);
        assert_eq!(config.order_ttl_ms, 864_000_000);
        assert_eq!(config.kdf, KdfSettings::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            transfer_fee = 300000

            [kdf]
            memory_kib = 64
            "#,
        )
        .unwrap();

        assert_eq!(config.transfer_fee, 300_000);
        assert_eq!(config.encryption_rounds, DEFAULT_ENCRYPTION_ROUNDS);
        assert_eq!(config.kdf.memory_kib, 64);
        assert_eq!(config.kdf.iterations, 2);
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_toml_str("encryption_rounds = \"many\"");
        assert!(matches!(result, Err(WalletError::Config(_))));
    }

    #[test]
    fn test_kdf_validation() {
        let result = Config::from_toml_str("[kdf]\nparallelism = 0");
        assert!(matches!(result, Err(WalletError::Config(_))));

        let result = Config::from_toml_str("[kdf]\nmemory_kib = 4");
        assert!(matches!(result, Err(WalletError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "encryption_rounds = 5000").unwrap();
        writeln!(file, "order_ttl_ms = 1000").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.encryption_rounds, 5000);
        assert_eq!(config.order_ttl_ms, 1000);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(WalletError::Io(_))));
    }
}
