//! Account addresses in hex and bech32 form

use crate::crypto::encoding::{decode_hex, to_prefixed_hex};
use crate::crypto::keccak256;
use crate::types::{SdkConfig, BECH32_ADDR_ACC_PREFIX};
use crate::{Result, SdkError};
use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Hrp};
use ethereum_types::H160;
use std::fmt;
use std::str::FromStr;

const ACCOUNT_HRP: Hrp = Hrp::parse_unchecked(BECH32_ADDR_ACC_PREFIX);

/// A 20-byte account address
///
/// The same bytes render as `0x` hex (ethereum style) or as bech32 with the
/// `inj` prefix; both forms parse back to identical bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address(H160);

impl Address {
    /// Create an address from 20 raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 20 {
            return Err(SdkError::invalid_address(format!(
                "Expected 20 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self(H160::from_slice(bytes)))
    }

    /// Parse a hex address, with or without `0x`, any case
    pub fn from_hex(address: &str) -> Result<Self> {
        let bytes = decode_hex(address)
            .map_err(|_| SdkError::invalid_address(format!("Invalid hex address: {}", address)))?;
        Self::from_bytes(&bytes)
    }

    /// Parse a bech32 account address with the `inj` prefix
    pub fn from_bech32(address: &str) -> Result<Self> {
        Self::from_bech32_with_prefix(address, BECH32_ADDR_ACC_PREFIX)
    }

    /// Parse a bech32 address, checking its human readable prefix.
    ///
    /// Only the original bech32 checksum is accepted. All-lowercase and
    /// all-uppercase strings parse to the same bytes; the prefix is compared
    /// ignoring case.
    pub fn from_bech32_with_prefix(address: &str, prefix: &str) -> Result<Self> {
        let checked = CheckedHrpstring::new::<Bech32>(address)
            .map_err(|e| SdkError::invalid_address(format!("Invalid bech32 address: {}", e)))?;

        let hrp = checked.hrp();
        if !hrp.as_str().eq_ignore_ascii_case(prefix) {
            return Err(SdkError::invalid_address(format!(
                "Expected prefix '{}', got '{}'",
                prefix,
                hrp.as_str()
            )));
        }

        let data: Vec<u8> = checked.byte_iter().collect();
        Self::from_bytes(&data)
    }

    /// Raw address bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// `0x`-prefixed lowercase hex
    pub fn to_hex(&self) -> String {
        to_prefixed_hex(self.0.as_bytes())
    }

    /// EIP-55 mixed-case checksum hex
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0.as_bytes());
        let hash = keccak256(lower.as_bytes());

        let checksummed: String = lower
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let nibble = (hash[i / 2] >> (if i % 2 == 0 { 4 } else { 0 })) & 0x0f;
                if nibble >= 8 {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect();

        format!("0x{}", checksummed)
    }

    /// Bech32 form with the `inj` prefix
    pub fn to_bech32(&self) -> String {
        self.to_string()
    }

    /// Bech32 form with a custom prefix
    pub fn to_bech32_with_prefix(&self, prefix: &str) -> Result<String> {
        let hrp = Hrp::parse(prefix)
            .map_err(|e| SdkError::invalid_address(format!("Invalid prefix '{}': {}", prefix, e)))?;

        bech32::encode::<Bech32>(hrp, self.0.as_bytes())
            .map_err(|e| SdkError::invalid_address(format!("Bech32 encoding failed: {}", e)))
    }

    /// Bech32 form with the configured prefix
    pub fn to_bech32_with_config(&self, config: &SdkConfig) -> Result<String> {
        self.to_bech32_with_prefix(&config.bech32_prefix)
    }

    /// Exchange subaccount id: the address followed by a 12-byte big-endian index
    pub fn subaccount_id(&self, index: u32) -> String {
        format!("{}{:024x}", self.to_hex(), index)
    }
}

impl From<H160> for Address {
    fn from(value: H160) -> Self {
        Self(value)
    }
}

impl From<Address> for H160 {
    fn from(value: Address) -> Self {
        value.0
    }
}

impl FromStr for Address {
    type Err = SdkError;

    /// Accepts either `0x` hex or an `inj` bech32 address
    fn from_str(s: &str) -> Result<Self> {
        if s.starts_with("0x") || s.starts_with("0X") {
            Self::from_hex(s)
        } else {
            Self::from_bech32(s)
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        bech32::encode_lower_to_fmt::<Bech32, _>(f, ACCOUNT_HRP, self.0.as_bytes())
            .map_err(|_| fmt::Error)
    }
}
