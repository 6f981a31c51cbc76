use super::keys::{decode_public_key, to_key_bytes, KeyPair};
use crate::error::Result;
use crate::utils::{base58_decode, base58_encode, hash_chain};

pub const ADDRESS_VERSION: u8 = 1;
pub const MAINNET_CHAIN_ID: u8 = b'W';
pub const ADDRESS_HASH_LEN: usize = 20;
pub const ADDRESS_CHECK_SUM_LEN: usize = 4;
/// version + chain id + public key hash + checksum
pub const ADDRESS_LEN: usize = 2 + ADDRESS_HASH_LEN + ADDRESS_CHECK_SUM_LEN;

fn checksum(payload: &[u8]) -> [u8; ADDRESS_CHECK_SUM_LEN] {
    let hash = hash_chain(payload);
    let mut out = [0u8; ADDRESS_CHECK_SUM_LEN];
    out.copy_from_slice(&hash[..ADDRESS_CHECK_SUM_LEN]);
    out
}

pub(crate) fn encode_address(public_key: &[u8; 32]) -> String {
    let pub_key_hash = hash_chain(public_key);
    let mut payload: Vec<u8> = Vec::with_capacity(ADDRESS_LEN);
    payload.push(ADDRESS_VERSION);
    payload.push(MAINNET_CHAIN_ID);
    payload.extend_from_slice(&pub_key_hash[..ADDRESS_HASH_LEN]);
    let checksum = checksum(&payload);
    payload.extend_from_slice(&checksum);
    // version + chain id + pub_key_hash + checksum
    base58_encode(&payload)
}

/// Address of a raw public key; anything but 32 bytes is `InvalidKey`
pub fn address_from_public_key_bytes(public_key: &[u8]) -> Result<String> {
    Ok(encode_address(&to_key_bytes(public_key)?))
}

/// Address of the account derived from a seed phrase
pub fn build_raw_address(secret_phrase: &str) -> Result<String> {
    let key_pair = KeyPair::from_seed_phrase(secret_phrase);
    let address = key_pair.address();
    log::debug!("Derived address {address} from seed phrase");
    Ok(address)
}

/// Address of a Base58 public key
pub fn build_raw_address_from_public_key(public_key: &str) -> Result<String> {
    let public_key = decode_public_key(public_key)?;
    Ok(encode_address(&public_key))
}

pub fn validate_address(address: &str) -> bool {
    let payload = match base58_decode(address) {
        Ok(payload) => payload,
        Err(_) => return false,
    };

    if payload.len() != ADDRESS_LEN {
        return false;
    }
    if payload[0] != ADDRESS_VERSION || payload[1] != MAINNET_CHAIN_ID {
        return false;
    }

    let (body, actual_checksum) = payload.split_at(ADDRESS_LEN - ADDRESS_CHECK_SUM_LEN);
    checksum(body) == actual_checksum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;

    const SEED: &str =
        "manage manual recall harvest series desert melt police rose hollow moral pledge kitten position add";
    const PUBLIC_KEY: &str = "HBqhfdFASRQ5eBBpu2y6c6KKi1az6bMx8v1JxX4iW1Q8";
    const ADDRESS: &str = "3PPbMwqLtwBGcJrTA5whqJfY95GqnNnFMDX";

    #[test]
    fn test_address_from_public_key_vector() {
        assert_eq!(build_raw_address_from_public_key(PUBLIC_KEY).unwrap(), ADDRESS);
    }

    #[test]
    fn test_address_from_seed_vector() {
        assert_eq!(build_raw_address(SEED).unwrap(), ADDRESS);
    }

    #[test]
    fn test_address_layout() {
        let payload = base58_decode(ADDRESS).unwrap();
        assert_eq!(payload.len(), ADDRESS_LEN);
        assert_eq!(payload[0], 1);
        assert_eq!(payload[1], b'W');

        let public_key = base58_decode(PUBLIC_KEY).unwrap();
        assert_eq!(&payload[2..22], &hash_chain(&public_key)[..20]);
        assert_eq!(&payload[22..], &hash_chain(&payload[..22])[..4]);
    }

    #[test]
    fn test_address_is_deterministic() {
        let phrase = "one two three four five six seven eight nine ten";
        assert_eq!(
            build_raw_address(phrase).unwrap(),
            build_raw_address(phrase).unwrap()
        );
    }

    #[test]
    fn test_invalid_public_key_length() {
        assert!(matches!(
            address_from_public_key_bytes(&[1u8; 31]),
            Err(WalletError::InvalidKey(_))
        ));
        assert!(matches!(
            address_from_public_key_bytes(&[1u8; 33]),
            Err(WalletError::InvalidKey(_))
        ));
        // 26-byte address is not a public key
        assert!(matches!(
            build_raw_address_from_public_key(ADDRESS),
            Err(WalletError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_validate_address() {
        assert!(validate_address(ADDRESS));
        assert!(validate_address(&build_raw_address("some other seed").unwrap()));

        // single character change breaks the checksum
        let tampered = ADDRESS.replacen('P', "Q", 1);
        assert!(!validate_address(&tampered));
        assert!(!validate_address(""));
        assert!(!validate_address("0OIl"));
        assert!(!validate_address(PUBLIC_KEY));
    }

    #[test]
    fn test_validate_rejects_other_network() {
        let mut payload = base58_decode(ADDRESS).unwrap();
        payload[1] = b'T';
        let checksum = checksum(&payload[..22]);
        payload[22..].copy_from_slice(&checksum);
        assert!(!validate_address(&base58_encode(&payload)));
    }
}
