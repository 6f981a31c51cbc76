// bincode 2 helpers for the binary envelopes produced by this crate
use crate::error::{Result, WalletError};
use serde::{Deserialize, Serialize};

/// Serialize data using bincode 2.0 with standard configuration
pub fn serialize<T: Serialize + bincode::Encode>(data: &T) -> Result<Vec<u8>> {
    let config = bincode::config::standard();
    bincode::encode_to_vec(data, config)
        .map_err(|e| WalletError::Serialization(format!("Serialization failed: {e}")))
}

/// Deserialize data using bincode 2.0 with standard configuration.
///
/// At most `LIMIT` bytes may be consumed, and length prefixes are checked
/// against that budget before anything is allocated. Trailing bytes after a
/// complete value are rejected.
pub fn deserialize<T, const LIMIT: usize>(bytes: &[u8]) -> Result<T>
where
    T: for<'de> Deserialize<'de> + bincode::Decode<()>,
{
    let config = bincode::config::standard().with_limit::<LIMIT>();
    let (data, read) = bincode::decode_from_slice(bytes, config)
        .map_err(|e| WalletError::Serialization(format!("Deserialization failed: {e}")))?;
    if read != bytes.len() {
        return Err(WalletError::Serialization(format!(
            "Deserialization left {} trailing bytes",
            bytes.len() - read
        )));
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
    struct Envelope {
        version: u8,
        salt: Vec<u8>,
        body: Vec<u8>,
    }

    #[test]
    fn test_serialize_deserialize() {
        let original = Envelope {
            version: 1,
            salt: vec![7; 16],
            body: b"sealed".to_vec(),
        };

        let serialized = serialize(&original).expect("Serialization should work");
        let deserialized: Envelope = deserialize::<_, 1024>(&serialized).expect("Deserialization should work");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let original = Envelope {
            version: 1,
            salt: vec![],
            body: vec![],
        };
        let mut serialized = serialize(&original).unwrap();
        serialized.push(0);

        let result: Result<Envelope> = deserialize::<_, 1024>(&serialized);
        assert!(matches!(result, Err(WalletError::Serialization(_))));
    }

    #[test]
    fn test_deserialize_invalid_data() {
        let invalid_bytes = vec![0xFF, 0xFF, 0xFF, 0xFF];
        let result: Result<Envelope> = deserialize::<_, 1024>(&invalid_bytes);
        assert!(result.is_err());
    }

    #[test]
    fn test_length_prefix_beyond_limit_is_rejected_before_allocation() {
        // version, then a salt claiming 2^40 bytes
        let mut bytes = vec![1u8, 0xFD];
        bytes.extend_from_slice(&(1u64 << 40).to_le_bytes());

        let result: Result<Envelope> = deserialize::<_, 1024>(&bytes);
        assert!(matches!(result, Err(WalletError::Serialization(_))));
    }

    #[test]
    fn test_value_larger_than_limit_is_rejected() {
        let original = Envelope {
            version: 1,
            salt: vec![0; 64],
            body: vec![0; 64],
        };
        let serialized = serialize(&original).unwrap();

        let result: Result<Envelope> = deserialize::<_, 100>(&serialized);
        assert!(matches!(result, Err(WalletError::Serialization(_))));
        assert!(deserialize::<Envelope, 200>(&serialized).is_ok());
    }
}
