//! Fixed-width integer encodings and byte concatenation used by the
//! signable payloads.

use crate::error::{Result, WalletError};

/// Two-byte little-endian encoding for lengths
pub fn short_to_bytes(value: u16) -> [u8; 2] {
    [(value & 0xff) as u8, (value >> 8) as u8]
}

/// Four-byte little-endian encoding, used for the seed nonce
pub fn int_to_bytes(value: u32) -> [u8; 4] {
    let mut bytes = [0u8; 4];
    let mut remaining = value;
    for byte in bytes.iter_mut() {
        *byte = (remaining & 0xff) as u8;
        remaining >>= 8;
    }
    bytes
}

/// Eight-byte big-endian encoding for amounts, fees, prices and timestamps.
///
/// The low byte is extracted first and written to the last index, so the
/// most significant byte ends up at index 0.
pub fn long_to_bytes(value: u64) -> [u8; 8] {
    let mut bytes = [0u8; 8];
    let mut remaining = value;
    for k in (0..8).rev() {
        bytes[k] = (remaining & 0xff) as u8;
        remaining >>= 8;
    }
    bytes
}

/// Two-byte length prefix followed by the bytes themselves
pub fn bytes_with_size(data: &[u8]) -> Result<Vec<u8>> {
    let len = u16::try_from(data.len()).map_err(|_| {
        WalletError::InvalidArgument(format!(
            "{} bytes do not fit a two-byte length prefix",
            data.len()
        ))
    })?;
    let mut out = Vec::with_capacity(data.len() + 2);
    out.extend_from_slice(&short_to_bytes(len));
    out.extend_from_slice(data);
    Ok(out)
}

pub fn concat_bytes(parts: &[&[u8]]) -> Vec<u8> {
    let total = parts.iter().map(|part| part.len()).sum();
    let mut out = Vec::with_capacity(total);
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}
