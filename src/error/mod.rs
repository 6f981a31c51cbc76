//! Error handling for the wallet core
//!
//! Every fallible operation in the crate returns [`Result`]. Failures are
//! reported synchronously to the caller and never carry partial output.

use std::fmt;

/// Result type alias for wallet operations
pub type Result<T> = std::result::Result<T, WalletError>;

/// Error types for key derivation, signing and seed protection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// Requested seed word count is not positive
    InvalidLength(String),
    /// Public key is not exactly 32 raw bytes
    InvalidKey(String),
    /// Missing or malformed input (seed, password, asset id, order type)
    InvalidArgument(String),
    /// Seed phrase rejected before encryption
    Validation(String),
    /// Any decryption failure; deliberately carries no detail
    WrongPassword,
    /// Base58 decoding errors
    Encoding(String),
    /// Curve, hashing or randomness failures
    Crypto(String),
    /// Cipher failures on the encryption path
    Encryption(String),
    /// Serialization/deserialization errors
    Serialization(String),
    /// Configuration errors
    Config(String),
    /// File I/O errors
    Io(String),
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletError::InvalidLength(msg) => write!(f, "Invalid length: {msg}"),
            WalletError::InvalidKey(msg) => write!(f, "Invalid key: {msg}"),
            WalletError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            WalletError::Validation(msg) => write!(f, "Validation error: {msg}"),
            WalletError::WrongPassword => write!(f, "The password is wrong"),
            WalletError::Encoding(msg) => write!(f, "Encoding error: {msg}"),
            WalletError::Crypto(msg) => write!(f, "Cryptographic error: {msg}"),
            WalletError::Encryption(msg) => write!(f, "Encryption error: {msg}"),
            WalletError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            WalletError::Config(msg) => write!(f, "Configuration error: {msg}"),
            WalletError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for WalletError {}

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        WalletError::Io(err.to_string())
    }
}

impl From<bs58::decode::Error> for WalletError {
    fn from(err: bs58::decode::Error) -> Self {
        WalletError::Encoding(format!("Invalid base58 encoding: {err}"))
    }
}

impl From<toml::de::Error> for WalletError {
    fn from(err: toml::de::Error) -> Self {
        WalletError::Config(err.to_string())
    }
}

impl From<bincode::error::EncodeError> for WalletError {
    fn from(err: bincode::error::EncodeError) -> Self {
        WalletError::Serialization(err.to_string())
    }
}

impl From<bincode::error::DecodeError> for WalletError {
    fn from(err: bincode::error::DecodeError) -> Self {
        WalletError::Serialization(err.to_string())
    }
}
