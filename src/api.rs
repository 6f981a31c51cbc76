//! Wallet facade
//!
//! [`WalletApi`] bundles the injected collaborators (randomness, seed cipher,
//! dictionary) with a [`Config`] and exposes the wallet operations with the
//! configured defaults filled in. It holds no account state between calls.

use crate::account;
use crate::config::{Config, GLOBAL_CONFIG};
use crate::core::{self, Order, OrderRequest, TransferRequest, TransferTransaction};
use crate::error::Result;
use crate::seed::{self, Aes256GcmCipher, Bip39English, Dictionary, PassphraseCipher};
use crate::utils::{current_timestamp, OsRandom, RandomSource};

pub struct WalletApi<R = OsRandom, C = Aes256GcmCipher, D = Bip39English>
where
    R: RandomSource,
    C: PassphraseCipher,
    D: Dictionary,
{
    config: Config,
    random: R,
    cipher: C,
    dictionary: D,
}

impl WalletApi {
    /// Production collaborators driven by `config`
    pub fn from_config(config: Config) -> Self {
        let cipher = Aes256GcmCipher::from_config(&config);
        Self::new(config, OsRandom, cipher, Bip39English)
    }
}

impl Default for WalletApi {
    fn default() -> Self {
        Self::from_config(GLOBAL_CONFIG.clone())
    }
}

impl<R, C, D> WalletApi<R, C, D>
where
    R: RandomSource,
    C: PassphraseCipher,
    D: Dictionary,
{
    pub fn new(config: Config, random: R, cipher: C, dictionary: D) -> Self {
        WalletApi {
            config,
            random,
            cipher,
            dictionary,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn get_address_from_public_key(&self, public_key: &str) -> Result<String> {
        account::build_raw_address_from_public_key(public_key)
    }

    pub fn generate_new_seed(&self, word_count: usize) -> Result<String> {
        seed::generate_new_seed(word_count, &self.random, &self.dictionary)
    }

    pub fn get_address(&self, seed_phrase: &str) -> Result<String> {
        account::build_raw_address(seed_phrase)
    }

    pub fn get_public_key(&self, seed_phrase: &str) -> String {
        account::get_public_key(seed_phrase)
    }

    pub fn get_private_key(&self, seed_phrase: &str) -> String {
        account::get_private_key(seed_phrase)
    }

    pub fn get_encoded_seed(&self, seed_phrase: &str) -> String {
        seed::get_encoded_seed(seed_phrase)
    }

    /// Encrypt with the configured number of strengthening rounds
    pub fn encrypt_seed_phrase(&self, seed_phrase: &str, password: &str) -> Result<String> {
        self.encrypt_seed_phrase_with_rounds(seed_phrase, password, self.config.encryption_rounds)
    }

    pub fn encrypt_seed_phrase_with_rounds(
        &self,
        seed_phrase: &str,
        password: &str,
        rounds: u32,
    ) -> Result<String> {
        seed::encrypt_seed_phrase(&self.cipher, seed_phrase, password, rounds)
    }

    pub fn decrypt_seed_phrase(&self, encrypted_seed: &str, password: &str) -> Result<String> {
        self.decrypt_seed_phrase_with_rounds(
            encrypted_seed,
            password,
            self.config.encryption_rounds,
        )
    }

    pub fn decrypt_seed_phrase_with_rounds(
        &self,
        encrypted_seed: &str,
        password: &str,
        rounds: u32,
    ) -> Result<String> {
        seed::decrypt_seed_phrase(&self.cipher, encrypted_seed, password, rounds)
    }

    /// Sign a transfer stamped with the current time and the configured fee
    pub fn send_asset(
        &self,
        seed_phrase: &str,
        request: &TransferRequest<'_>,
    ) -> Result<TransferTransaction> {
        self.send_asset_at(seed_phrase, request, current_timestamp()?)
    }

    pub fn send_asset_at(
        &self,
        seed_phrase: &str,
        request: &TransferRequest<'_>,
        timestamp: u64,
    ) -> Result<TransferTransaction> {
        core::send_asset(
            seed_phrase,
            request,
            self.config.transfer_fee,
            timestamp,
            &self.random,
        )
    }

    /// Sign an order stamped with the current time; it expires after the
    /// configured order lifetime
    pub fn post_to_dex(&self, seed_phrase: &str, request: &OrderRequest<'_>) -> Result<Order> {
        self.post_to_dex_at(seed_phrase, request, current_timestamp()?)
    }

    pub fn post_to_dex_at(
        &self,
        seed_phrase: &str,
        request: &OrderRequest<'_>,
        timestamp: u64,
    ) -> Result<Order> {
        core::post_to_dex(
            seed_phrase,
            request,
            timestamp,
            self.config.order_ttl_ms,
            &self.random,
        )
    }

    pub fn compare_assets<'a>(&self, first: &'a str, second: &'a str) -> &'a str {
        core::compare_assets(first, second)
    }

    pub fn verify_signature(
        &self,
        public_key: &str,
        message: &[u8],
        signature: &str,
    ) -> Result<bool> {
        core::verify_signature(public_key, message, signature)
    }
}
