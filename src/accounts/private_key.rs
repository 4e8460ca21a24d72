//! Private keys: derivation, export and signing

use super::address::Address;
use super::public_key::PublicKey;
use crate::crypto::encoding::{decode_hex, to_prefixed_hex};
use crate::crypto::eip712::TypedData;
use crate::crypto::signature;
use crate::types::{SdkConfig, DEFAULT_DERIVATION_PATH};
use crate::{Result, SdkError};
use bip32::{DerivationPath, XPrv};
use bip39::Mnemonic;
use k256::ecdsa::SigningKey;
use rand::RngCore;
use std::fmt;
use std::str::FromStr;

/// A secp256k1 private key
///
/// The scalar is validated when the key is created, so every signing method
/// below operates on a known-good key. Key material is never printed: the
/// `Debug` impl redacts it.
#[derive(Clone)]
pub struct PrivateKey {
    signing_key: SigningKey,
}

impl PrivateKey {
    /// Generate a key from a fresh 12-word mnemonic, returned alongside it
    pub fn generate() -> Result<(Self, String)> {
        let mut entropy = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut entropy);

        let mnemonic = Mnemonic::from_entropy(&entropy)
            .map_err(|e| SdkError::invalid_mnemonic(e.to_string()))?;
        let phrase = mnemonic.to_string();
        let private_key = Self::from_mnemonic(&phrase, None)?;

        Ok((private_key, phrase))
    }

    /// Derive a key from a BIP-39 mnemonic along a BIP-32 path.
    ///
    /// `None` uses `m/44'/60'/0'/0/0`.
    pub fn from_mnemonic(words: &str, path: Option<&str>) -> Result<Self> {
        let mnemonic = Mnemonic::parse_normalized(words)
            .map_err(|e| SdkError::invalid_mnemonic(e.to_string()))?;
        let seed = mnemonic.to_seed("");

        let path = path.unwrap_or(DEFAULT_DERIVATION_PATH);
        let path: DerivationPath = path
            .parse()
            .map_err(|e: bip32::Error| SdkError::invalid_derivation_path(format!("{}: {}", path, e)))?;

        let xprv = XPrv::derive_from_path(seed, &path)
            .map_err(|e| SdkError::invalid_derivation_path(format!("Key derivation failed: {}", e)))?;

        Self::from_bytes(&xprv.private_key().to_bytes())
    }

    /// Derive a key from a mnemonic using the configured derivation path
    pub fn from_mnemonic_with_config(words: &str, config: &SdkConfig) -> Result<Self> {
        Self::from_mnemonic(words, Some(&config.derivation_path))
    }

    /// Create a key from 32 raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 32 {
            return Err(SdkError::invalid_private_key(format!(
                "Expected 32 bytes, got {}",
                bytes.len()
            )));
        }

        let signing_key = SigningKey::from_slice(bytes)
            .map_err(|_| SdkError::invalid_private_key("Scalar is out of range"))?;

        Ok(Self { signing_key })
    }

    /// Create a key from hex, with or without `0x`, any case
    pub fn from_hex(private_key: &str) -> Result<Self> {
        let bytes = decode_hex(private_key)
            .map_err(|_| SdkError::invalid_private_key("Invalid hex private key"))?;
        Self::from_bytes(&bytes)
    }

    /// The private key as `0x`-prefixed lowercase hex
    pub fn to_private_key_hex(&self) -> String {
        to_prefixed_hex(self.signing_key.to_bytes())
    }

    /// The public key for this private key
    pub fn to_public_key(&self) -> PublicKey {
        PublicKey::from(*self.signing_key.verifying_key())
    }

    /// The account address as `0x` hex
    pub fn to_hex(&self) -> String {
        self.to_address().to_hex()
    }

    /// The account address
    pub fn to_address(&self) -> Address {
        self.to_public_key().to_address()
    }

    /// The account address in bech32 (`inj1...`)
    pub fn to_bech32(&self) -> String {
        self.to_address().to_bech32()
    }

    /// Keccak-256 the message and sign the digest, returning `r || s`
    pub fn sign(&self, message: &[u8]) -> Result<[u8; 64]> {
        self.sign_hashed(&signature::hash_message(message))
    }

    /// Keccak-256 the message and sign with libsecp256k1, returning `r || s`
    pub fn sign_ecdsa(&self, message: &[u8]) -> Result<[u8; 64]> {
        self.sign_hashed_ecdsa(&signature::hash_message(message))
    }

    /// Sign a precomputed 32-byte digest, returning `r || s`
    pub fn sign_hashed(&self, digest: &[u8]) -> Result<[u8; 64]> {
        signature::sign_prehash(&self.signing_key, digest)
    }

    /// Sign a precomputed 32-byte digest with libsecp256k1, returning `r || s`
    pub fn sign_hashed_ecdsa(&self, digest: &[u8]) -> Result<[u8; 64]> {
        signature::sign_prehash_ecdsa(&self.signing_key, digest)
    }

    /// Sign an EIP-712 document, returning `r || s || v`
    pub fn sign_typed_data(&self, typed_data: &TypedData) -> Result<[u8; 65]> {
        let digest = typed_data.signing_hash()?;
        signature::sign_prehash_recoverable(&self.signing_key, &digest)
    }

    /// Sign a precomputed EIP-712 digest, returning `r || s`
    pub fn sign_hashed_typed_data(&self, digest: &[u8]) -> Result<[u8; 64]> {
        signature::sign_prehash_ecdsa(&self.signing_key, digest)
    }
}

impl FromStr for PrivateKey {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = SdkError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("address", &self.to_hex())
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIVATE_KEY: &str = "f9db9bf330e23cb7839039e944adef6e9df447b90b503d5b4464c90bea9022f3";
    const PUBLIC_KEY_BASE64: &str = "A13cTVZCuTg+Lwh7LuiLcgf2KG68nzEOnfFAbszCwxgT";
    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_public_key_from_private_key() {
        let private_key = PrivateKey::from_hex(PRIVATE_KEY).unwrap();
        assert_eq!(private_key.to_public_key().to_base64(), PUBLIC_KEY_BASE64);
    }

    #[test]
    fn test_public_key_from_prefixed_private_key() {
        let private_key = PrivateKey::from_hex(&format!("0x{}", PRIVATE_KEY)).unwrap();
        assert_eq!(private_key.to_public_key().to_base64(), PUBLIC_KEY_BASE64);
    }

    #[test]
    fn test_private_key_hex_round_trip() {
        let upper = format!("0x{}", PRIVATE_KEY.to_uppercase());
        let private_key = PrivateKey::from_hex(&upper).unwrap();
        let canonical = private_key.to_private_key_hex();
        assert_eq!(canonical, format!("0x{}", PRIVATE_KEY));

        let again = PrivateKey::from_hex(&canonical).unwrap();
        assert_eq!(again.to_private_key_hex(), canonical);
        assert_eq!(again.to_public_key(), private_key.to_public_key());
    }

    #[test]
    fn test_from_bytes_matches_from_hex() {
        let bytes = hex::decode(PRIVATE_KEY).unwrap();
        let from_bytes = PrivateKey::from_bytes(&bytes).unwrap();
        let from_hex: PrivateKey = PRIVATE_KEY.parse().unwrap();
        assert_eq!(from_bytes.to_private_key_hex(), from_hex.to_private_key_hex());
    }

    #[test]
    fn test_addresses() {
        let private_key = PrivateKey::from_hex(PRIVATE_KEY).unwrap();
        assert_eq!(
            private_key.to_hex(),
            "0xbdaedec95d563fb05240d6e01821008454c24c36"
        );
        assert_eq!(
            private_key.to_bech32(),
            "inj1hkhdaj2a2clmq5jq6mspsggqs32vynpk228q3r"
        );
        assert_eq!(private_key.to_address(), private_key.to_address());
    }

    #[test]
    fn test_invalid_private_keys() {
        assert!(matches!(
            PrivateKey::from_hex("0xf9db9b"),
            Err(SdkError::InvalidPrivateKey { .. })
        ));
        assert!(PrivateKey::from_hex(&"00".repeat(32)).is_err());
        assert!(PrivateKey::from_hex(&"ff".repeat(32)).is_err());
        assert!(PrivateKey::from_hex("zz").is_err());
        assert!(PrivateKey::from_bytes(&[1u8; 33]).is_err());
    }

    #[test]
    fn test_from_mnemonic_default_path() {
        let private_key = PrivateKey::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        assert_eq!(
            private_key.to_private_key_hex(),
            "0x1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727"
        );
        assert_eq!(
            private_key.to_address().to_checksum(),
            "0x9858EfFD232B4033E47d90003D41EC34EcaEda94"
        );
    }

    #[test]
    fn test_from_mnemonic_explicit_path() {
        let default = PrivateKey::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let same = PrivateKey::from_mnemonic(TEST_MNEMONIC, Some("m/44'/60'/0'/0/0")).unwrap();
        let other = PrivateKey::from_mnemonic(TEST_MNEMONIC, Some("m/44'/60'/0'/0/1")).unwrap();

        assert_eq!(default.to_private_key_hex(), same.to_private_key_hex());
        assert_ne!(default.to_private_key_hex(), other.to_private_key_hex());

        let config = SdkConfig::default().with_derivation_path("m/44'/60'/0'/0/1");
        let configured = PrivateKey::from_mnemonic_with_config(TEST_MNEMONIC, &config).unwrap();
        assert_eq!(configured.to_private_key_hex(), other.to_private_key_hex());
    }

    #[test]
    fn test_from_mnemonic_errors() {
        assert!(matches!(
            PrivateKey::from_mnemonic("abandon abandon abandon", None),
            Err(SdkError::InvalidMnemonic { .. })
        ));
        assert!(matches!(
            PrivateKey::from_mnemonic(TEST_MNEMONIC, Some("not/a/path")),
            Err(SdkError::InvalidDerivationPath { .. })
        ));
    }

    #[test]
    fn test_generate() {
        let (private_key, mnemonic) = PrivateKey::generate().unwrap();
        assert_eq!(mnemonic.split_whitespace().count(), 12);

        let restored = PrivateKey::from_mnemonic(&mnemonic, None).unwrap();
        assert_eq!(restored.to_private_key_hex(), private_key.to_private_key_hex());
    }

    #[test]
    fn test_debug_redacts_key() {
        let private_key = PrivateKey::from_hex(PRIVATE_KEY).unwrap();
        let debug = format!("{:?}", private_key);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains(PRIVATE_KEY));
    }
}
