//! Hex canonicalization shared by every key, address and signature boundary

use crate::Result;

/// Strip an optional `0x`/`0X` prefix
pub fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// Decode hex with or without a `0x` prefix, in any case
pub fn decode_hex(value: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(strip_hex_prefix(value.trim()))?)
}

/// Canonical form: `0x` followed by lowercase hex
pub fn to_prefixed_hex(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Normalize a hex string to its canonical `0x`-prefixed lowercase form
pub fn canonical_hex(value: &str) -> String {
    format!("0x{}", strip_hex_prefix(value.trim()).to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_hex_prefix() {
        assert_eq!(strip_hex_prefix("0xabcd"), "abcd");
        assert_eq!(strip_hex_prefix("0XABCD"), "ABCD");
        assert_eq!(strip_hex_prefix("abcd"), "abcd");
    }

    #[test]
    fn test_decode_hex_accepts_prefix_and_case() {
        assert_eq!(decode_hex("0xABcd").unwrap(), vec![0xab, 0xcd]);
        assert_eq!(decode_hex("abCD").unwrap(), vec![0xab, 0xcd]);
        assert!(decode_hex("0xabc").is_err());
        assert!(decode_hex("zz").is_err());
    }

    #[test]
    fn test_canonical_hex() {
        assert_eq!(canonical_hex("0XABCD"), "0xabcd");
        assert_eq!(canonical_hex("AbCd"), "0xabcd");
        assert_eq!(to_prefixed_hex([0xab, 0xcd]), "0xabcd");
    }
}
