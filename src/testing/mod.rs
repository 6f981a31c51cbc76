//! Deterministic doubles for the injected primitives
//!
//! Only compiled for unit tests. Byte-exact expectations need randomness the
//! test controls, and fast seed-cipher tests need a cheap key derivation.

pub mod test_utils;

pub use test_utils::*;
