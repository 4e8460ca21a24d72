//! Core types shared across the SDK
//!
//! # Architecture
//!
//! The types module is organized as follows:
//! - [`network`] - Networks and the cosmos/ethereum chain-id pairing
//! - [`constants`] - Derivation path, address prefixes, type URLs, EIP-712 domain values
//! - [`config`] - [`SdkConfig`] for key derivation and signing
//!
//! # Examples
//!
//! ```
//! use injective_sdk::types::{ChainContext, Network, SdkConfig};
//!
//! let config = SdkConfig::new(Network::Testnet);
//! assert_eq!(config.chain_context(), ChainContext::testnet());
//!
//! // Sepolia pairs with the Injective testnet
//! let context = ChainContext::from_ethereum_chain_id(11155111);
//! assert_eq!(context.chain_id, "injective-888");
//! ```

pub mod config;
pub mod constants;
pub mod network;

pub use config::SdkConfig;
pub use constants::{
    eip712_domain, type_urls, BECH32_ADDR_ACC_PREFIX, BECH32_ADDR_VAL_PREFIX,
    DEFAULT_DERIVATION_PATH,
};
pub use network::{ethereum_chain_id, ChainContext, Network};
