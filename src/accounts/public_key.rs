//! secp256k1 public keys

use super::address::Address;
use crate::crypto::encoding::{decode_hex, to_prefixed_hex};
use crate::crypto::keccak256;
use crate::types::type_urls;
use crate::{Result, SdkError};
use base64::{engine::general_purpose, Engine as _};
use cosmos_sdk_proto::Any;
use k256::ecdsa::VerifyingKey;
use prost::Message;
use std::fmt;

/// Protobuf form of `/injective.crypto.v1beta1.ethsecp256k1.PubKey`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EthSecp256k1PubKey {
    #[prost(bytes = "vec", tag = "1")]
    pub key: Vec<u8>,
}

/// A secp256k1 public key, held as a curve point
///
/// Renders in compressed (33 byte) form unless asked otherwise.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey(VerifyingKey);

impl PublicKey {
    /// Parse SEC1 bytes, compressed (33) or uncompressed (65)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        VerifyingKey::from_sec1_bytes(bytes)
            .map(Self)
            .map_err(|_| SdkError::invalid_public_key("Not a valid secp256k1 point"))
    }

    /// Parse hex SEC1 bytes with or without `0x`
    pub fn from_hex(public_key: &str) -> Result<Self> {
        let bytes = decode_hex(public_key)
            .map_err(|_| SdkError::invalid_public_key("Invalid hex public key"))?;
        Self::from_bytes(&bytes)
    }

    /// Parse base64 SEC1 bytes
    pub fn from_base64(public_key: &str) -> Result<Self> {
        let bytes = general_purpose::STANDARD.decode(public_key)?;
        Self::from_bytes(&bytes)
    }

    /// Compressed SEC1 bytes
    pub fn to_bytes(&self) -> [u8; 33] {
        let mut bytes = [0u8; 33];
        bytes.copy_from_slice(self.0.to_encoded_point(true).as_bytes());
        bytes
    }

    /// Uncompressed SEC1 bytes (`0x04 || x || y`)
    pub fn to_uncompressed_bytes(&self) -> [u8; 65] {
        let mut bytes = [0u8; 65];
        bytes.copy_from_slice(self.0.to_encoded_point(false).as_bytes());
        bytes
    }

    /// `0x`-prefixed lowercase hex of the compressed key
    pub fn to_hex(&self) -> String {
        to_prefixed_hex(self.to_bytes())
    }

    /// Base64 of the compressed key
    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(self.to_bytes())
    }

    /// Account address: last 20 bytes of keccak-256 over the uncompressed point
    pub fn to_address(&self) -> Address {
        let uncompressed = self.to_uncompressed_bytes();
        let hash = keccak256(&uncompressed[1..]);
        Address::from(ethereum_types::H160::from_slice(&hash[12..]))
    }

    /// Pack into an `Any` for a transaction's signer info
    pub fn to_any(&self) -> Any {
        Any {
            type_url: type_urls::ETH_SECP256K1_PUB_KEY.to_string(),
            value: EthSecp256k1PubKey {
                key: self.to_bytes().to_vec(),
            }
            .encode_to_vec(),
        }
    }

    /// Unpack from a signer info `Any`
    pub fn from_any(any: &Any) -> Result<Self> {
        if any.type_url != type_urls::ETH_SECP256K1_PUB_KEY {
            return Err(SdkError::invalid_public_key(format!(
                "Unsupported public key type {}",
                any.type_url
            )));
        }
        let proto = EthSecp256k1PubKey::decode(any.value.as_slice())?;
        Self::from_bytes(&proto.key)
    }

    /// Underlying k256 key
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.0
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(value: VerifyingKey) -> Self {
        Self(value)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey").field(&self.to_hex()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPRESSED_HEX: &str =
        "0x035ddc4d5642b9383e2f087b2ee88b7207f6286ebc9f310e9df1406eccc2c31813";
    const COMPRESSED_BASE64: &str = "A13cTVZCuTg+Lwh7LuiLcgf2KG68nzEOnfFAbszCwxgT";

    #[test]
    fn test_hex_and_base64_agree() {
        let from_hex = PublicKey::from_hex(COMPRESSED_HEX).unwrap();
        let from_base64 = PublicKey::from_base64(COMPRESSED_BASE64).unwrap();
        assert_eq!(from_hex, from_base64);
        assert_eq!(from_hex.to_base64(), COMPRESSED_BASE64);
        assert_eq!(from_base64.to_hex(), COMPRESSED_HEX);
    }

    #[test]
    fn test_uncompressed_round_trip() {
        let key = PublicKey::from_hex(COMPRESSED_HEX).unwrap();
        let uncompressed = key.to_uncompressed_bytes();
        assert_eq!(uncompressed[0], 0x04);
        assert_eq!(PublicKey::from_bytes(&uncompressed).unwrap(), key);
    }

    #[test]
    fn test_address() {
        let key = PublicKey::from_base64(COMPRESSED_BASE64).unwrap();
        assert_eq!(
            key.to_address().to_hex(),
            "0xbdaedec95d563fb05240d6e01821008454c24c36"
        );
    }

    #[test]
    fn test_any_round_trip() {
        let key = PublicKey::from_hex(COMPRESSED_HEX).unwrap();
        let any = key.to_any();
        assert_eq!(any.type_url, "/injective.crypto.v1beta1.ethsecp256k1.PubKey");
        assert_eq!(PublicKey::from_any(&any).unwrap(), key);
    }

    #[test]
    fn test_invalid_keys() {
        // one byte short of a compressed point
        assert!(PublicKey::from_hex(
            "035ddc4d5642b9383e2f087b2ee88b7207f6286ebc9f310e9df1406eccc2c318"
        )
        .is_err());
        assert!(PublicKey::from_bytes(&[0u8; 33]).is_err());
        assert!(PublicKey::from_base64("not base64!").is_err());
    }
}
