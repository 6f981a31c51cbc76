use crate::error::{Result, WalletError};
use crate::utils::base58_decode;

pub const ASSET_ID_LEN: usize = 32;

/// Raw bytes of a Base58 asset id, which must be exactly 32 bytes
pub fn asset_id_bytes(asset_id: &str) -> Result<[u8; ASSET_ID_LEN]> {
    let bytes = base58_decode(asset_id)?;
    bytes.as_slice().try_into().map_err(|_| {
        WalletError::InvalidArgument(format!(
            "Asset id must be {ASSET_ID_LEN} bytes, got {}",
            bytes.len()
        ))
    })
}

/// Presence flag, then the 32 asset id bytes when an id is given.
/// An empty string counts as absent.
pub fn optional_asset_bytes(asset_id: Option<&str>) -> Result<Vec<u8>> {
    match asset_id.filter(|id| !id.is_empty()) {
        None => Ok(vec![0]),
        Some(id) => {
            let mut out = Vec::with_capacity(ASSET_ID_LEN + 1);
            out.push(1);
            out.extend_from_slice(&asset_id_bytes(id)?);
            Ok(out)
        }
    }
}

/// Flag 1 followed by the 32 asset id bytes; the id is mandatory
pub fn required_asset_bytes(asset_id: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(ASSET_ID_LEN + 1);
    out.push(1);
    out.extend_from_slice(&asset_id_bytes(asset_id)?);
    Ok(out)
}

/// Canonical ordering helper for an asset pair: the id whose bytes have the
/// smaller sum wins, ties go to `second`.
pub fn compare_assets<'a>(first: &'a str, second: &'a str) -> &'a str {
    let sum = |id: &str| id.bytes().map(u64::from).sum::<u64>();
    if sum(first) < sum(second) {
        first
    } else {
        second
    }
}
