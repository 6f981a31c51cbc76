//! Test utilities for the wallet core

use crate::config::{Config, KdfSettings};
use crate::error::{Result, WalletError};
use crate::seed::Dictionary;
use crate::utils::RandomSource;
use std::sync::Mutex;

pub const TEST_SEED: &str =
    "manage manual recall harvest series desert melt police rose hollow moral pledge kitten position add";
pub const TEST_PUBLIC_KEY: &str = "HBqhfdFASRQ5eBBpu2y6c6KKi1az6bMx8v1JxX4iW1Q8";
pub const TEST_PRIVATE_KEY: &str = "3kMEhU5z3v8bmer1ERFUUhW58Dtuhyo9hE5vrhjqAWYT";
pub const TEST_ADDRESS: &str = "3PPbMwqLtwBGcJrTA5whqJfY95GqnNnFMDX";

/// Argon2 cost low enough for debug-mode tests
pub fn fast_kdf() -> KdfSettings {
    KdfSettings {
        memory_kib: 64,
        iterations: 1,
        parallelism: 1,
    }
}

pub fn test_config() -> Config {
    Config {
        kdf: fast_kdf(),
        ..Config::default()
    }
}

/// Fills every request with the same byte
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub u8);

impl RandomSource for FixedRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        dest.fill(self.0);
        Ok(())
    }
}

/// Replays a script of bytes, continuing where the previous request stopped
#[derive(Debug)]
pub struct ScriptedRandom {
    bytes: Vec<u8>,
    cursor: Mutex<usize>,
}

impl ScriptedRandom {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            cursor: Mutex::new(0),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        let mut cursor = self
            .cursor
            .lock()
            .map_err(|_| WalletError::Crypto("scripted random poisoned".to_string()))?;
        let end = *cursor + dest.len();
        if end > self.bytes.len() {
            return Err(WalletError::Crypto("scripted random exhausted".to_string()));
        }
        dest.copy_from_slice(&self.bytes[*cursor..end]);
        *cursor = end;
        Ok(())
    }
}

/// Always fails, for error-path tests
#[derive(Debug, Clone, Copy)]
pub struct FailingRandom;

impl RandomSource for FailingRandom {
    fn fill_bytes(&self, _dest: &mut [u8]) -> Result<()> {
        Err(WalletError::Crypto("entropy unavailable".to_string()))
    }
}

/// Three-word dictionary, so word indices are easy to predict
pub struct TinyDictionary;

impl Dictionary for TinyDictionary {
    fn words(&self) -> &[&'static str] {
        &["alpha", "beta", "gamma"]
    }
}
