//! # Injective SDK
//!
//! Account keys, EIP-712 signing and transaction signature verification for the
//! Injective chain.
//!
//! ## Features
//!
//! - **Key material**: BIP-39 mnemonics with BIP-32 derivation (`m/44'/60'/0'/0/0`), or raw hex keys
//! - **Addresses**: ethereum-style `0x` addresses, EIP-55 checksums and `inj` bech32 addresses
//! - **Signing**: raw keccak-256 digests, EIP-712 (v4) typed data, and transactions wrapped in the `Tx { context, msgs }` template
//! - **Verification**: typed-data signatures, ADR-36 arbitrary data signatures, and cosmos transactions signed through a web3 wallet
//!
//! ## Quick Start
//!
//! ### Signing and verifying typed data
//!
//! ```rust
//! use injective_sdk::{verify_signature, PrivateKey, TypedData};
//!
//! # fn main() -> injective_sdk::Result<()> {
//! let private_key = PrivateKey::from_mnemonic(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     None,
//! )?;
//!
//! let typed_data = TypedData::from_json(r#"{
//!     "types": {
//!         "EIP712Domain": [{"name": "name", "type": "string"}],
//!         "Login": [{"name": "nonce", "type": "uint256"}]
//!     },
//!     "primaryType": "Login",
//!     "domain": {"name": "Example"},
//!     "message": {"nonce": "42"}
//! }"#)?;
//!
//! let signature = hex::encode(private_key.sign_typed_data(&typed_data)?);
//! let public_key = private_key.to_public_key().to_hex();
//! assert!(verify_signature(&signature, &typed_data, &public_key)?);
//! # Ok(())
//! # }
//! ```
//!
//! ### Verifying a signed transaction
//!
//! ```rust,no_run
//! use cosmos_sdk_proto::cosmos::tx::v1beta1::TxRaw;
//! use injective_sdk::{verify_cosmos_signature, CosmosSigner};
//! use prost::Message;
//!
//! # fn example(tx_bytes: &[u8]) -> injective_sdk::Result<()> {
//! let tx_raw = TxRaw::decode(tx_bytes)?;
//! let signer = CosmosSigner::new(17, "A13cTVZCuTg+Lwh7LuiLcgf2KG68nzEOnfFAbszCwxgT");
//!
//! if verify_cosmos_signature(&tx_raw, &signer)? {
//!     println!("Signed by the expected account");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **`types`**: Networks, chain-id pairing, constants and [`SdkConfig`]
//! - **`crypto`**: Keccak-256, EIP-712 hashing, ECDSA signing and recovery
//! - **`accounts`**: [`PrivateKey`], [`PublicKey`] and [`Address`]
//! - **`tx`**: Transaction decomposition, the web3 extension, messages, typed-data templates and signing
//! - **`verifier`**: Typed-data, arbitrary-data and cosmos transaction verification
//! - **`error`**: [`SdkError`] and the crate [`Result`]
//!
//! ## Logging
//!
//! The crate emits `tracing` events at `debug` level for chain context
//! resolution and verification outcomes, and a `warn` when a transaction's
//! extension options hold no web3 extension. Key material is never logged.

pub mod accounts;
pub mod crypto;
pub mod error;
pub mod tx;
pub mod types;
pub mod verifier;

#[cfg(test)]
mod test_fixtures;

// Re-exports for convenience
pub use accounts::{Address, PrivateKey, PublicKey};
pub use crypto::eip712::TypedData;
pub use error::{Result, SdkError};
pub use types::{ChainContext, Network, SdkConfig};
pub use verifier::{
    verify_arbitrary_signature, verify_cosmos_signature, verify_signature, CosmosSigner,
    CosmosTxVerifier,
};

/// Current version of the SDK
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
