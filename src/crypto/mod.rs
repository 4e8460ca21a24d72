//! Cryptographic utilities for Injective accounts
//!
//! This module provides the low level primitives the account and verification
//! layers are built on: keccak-256, EIP-712 typed data hashing, and secp256k1
//! ECDSA signing, recovery and verification.
//!
//! # Architecture
//!
//! The crypto module is organized as follows:
//! - [`encoding`] - Hex canonicalization (`0x` prefix, case folding)
//! - [`eip712`] - EIP-712 (v4) typed data hashing
//! - [`signature`] - ECDSA signature creation, recovery and verification
//!
//! # Examples
//!
//! ## EIP-712 Typed Data Hashing
//!
//! ```
//! use injective_sdk::crypto::eip712::TypedData;
//!
//! # fn example() -> injective_sdk::Result<()> {
//! let typed_data = TypedData::from_json(r#"{
//!     "types": {
//!         "EIP712Domain": [{"name": "name", "type": "string"}],
//!         "Greeting": [{"name": "text", "type": "string"}]
//!     },
//!     "primaryType": "Greeting",
//!     "domain": {"name": "Example"},
//!     "message": {"text": "hello"}
//! }"#)?;
//!
//! let digest = typed_data.signing_hash()?;
//! assert_eq!(digest.len(), 32);
//! # Ok(())
//! # }
//! ```
//!
//! ## Signature Recovery
//!
//! ```no_run
//! use injective_sdk::crypto::signature::RecoverableSignature;
//!
//! # fn example(digest: [u8; 32]) -> injective_sdk::Result<()> {
//! let signature = RecoverableSignature::from_hex("0xe75d...1c")?;
//! if let Some(key) = signature.recover(&digest) {
//!     println!("Signed by {:?}", key);
//! }
//! # Ok(())
//! # }
//! ```

pub mod eip712;
pub mod encoding;
pub mod signature;


// Re-export commonly used items
pub use eip712::{hash_typed_data, keccak256, TypedData, TypedDataField};
pub use signature::{
    hash_message, sign_prehash, sign_prehash_ecdsa, sign_prehash_recoverable, verify_prehash,
    RecoverableSignature,
};
