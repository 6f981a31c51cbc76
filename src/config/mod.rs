//! Configuration management
//!
//! This module holds the tunable defaults of the wallet core: password
//! strengthening rounds, transfer fee, order lifetime and the key derivation
//! cost of the seed cipher.
//!
//! Compatibility-critical constants (address layout, nonce, transaction type)
//! are deliberately not configurable and live next to the code that uses them.

pub mod settings;

pub use settings::{Config, KdfSettings, GLOBAL_CONFIG};
