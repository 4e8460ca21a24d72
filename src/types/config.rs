//! SDK configuration

use super::constants::{BECH32_ADDR_ACC_PREFIX, DEFAULT_DERIVATION_PATH};
use super::network::{ChainContext, Network};
use crate::{Result, SdkError};
use std::env;

/// Environment variable selecting the network (`mainnet` / `testnet`)
pub const ENV_NETWORK: &str = "INJECTIVE_NETWORK";
/// Environment variable overriding the derivation path
pub const ENV_DERIVATION_PATH: &str = "INJECTIVE_DERIVATION_PATH";
/// Environment variable overriding the bech32 prefix
pub const ENV_BECH32_PREFIX: &str = "INJECTIVE_BECH32_PREFIX";
/// Environment variable overriding the ethereum chain id
pub const ENV_ETHEREUM_CHAIN_ID: &str = "INJECTIVE_ETHEREUM_CHAIN_ID";

/// Configuration for key derivation and signing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    /// Network transactions are signed for
    pub network: Network,
    /// BIP-32 derivation path used for mnemonics
    pub derivation_path: String,
    /// Bech32 prefix for account addresses
    pub bech32_prefix: String,
    /// Override of the ethereum chain id paired with the network
    pub ethereum_chain_id: Option<u64>,
}

impl SdkConfig {
    /// Create a new config for a network
    pub fn new(network: Network) -> Self {
        Self {
            network,
            derivation_path: DEFAULT_DERIVATION_PATH.to_string(),
            bech32_prefix: BECH32_ADDR_ACC_PREFIX.to_string(),
            ethereum_chain_id: None,
        }
    }

    /// Build a config from `INJECTIVE_*` environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(network) = env::var(ENV_NETWORK) {
            config.network = Network::from_name(&network.to_lowercase()).ok_or_else(|| {
                SdkError::config(format!("Unknown network '{}' in {}", network, ENV_NETWORK))
            })?;
        }

        if let Ok(path) = env::var(ENV_DERIVATION_PATH) {
            config.derivation_path = path;
        }

        if let Ok(prefix) = env::var(ENV_BECH32_PREFIX) {
            config.bech32_prefix = prefix;
        }

        if let Ok(chain_id) = env::var(ENV_ETHEREUM_CHAIN_ID) {
            let chain_id = chain_id.parse::<u64>().map_err(|_| {
                SdkError::config(format!(
                    "{} must be an unsigned integer, got '{}'",
                    ENV_ETHEREUM_CHAIN_ID, chain_id
                ))
            })?;
            config.ethereum_chain_id = Some(chain_id);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.derivation_path.starts_with("m/") {
            return Err(SdkError::config("Derivation path must start with m/"));
        }

        if self.bech32_prefix.is_empty() {
            return Err(SdkError::config("Bech32 prefix cannot be empty"));
        }

        if self
            .bech32_prefix
            .chars()
            .any(|c| !c.is_ascii_lowercase() && !c.is_ascii_digit())
        {
            return Err(SdkError::config(
                "Bech32 prefix must be lowercase alphanumeric",
            ));
        }

        if self.ethereum_chain_id == Some(0) {
            return Err(SdkError::config("Ethereum chain id cannot be 0"));
        }

        Ok(())
    }

    /// Set the network
    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// Set the derivation path
    pub fn with_derivation_path(mut self, path: impl Into<String>) -> Self {
        self.derivation_path = path.into();
        self
    }

    /// Set the bech32 prefix
    pub fn with_bech32_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.bech32_prefix = prefix.into();
        self
    }

    /// Pin the ethereum chain id instead of using the network default
    pub fn with_ethereum_chain_id(mut self, chain_id: u64) -> Self {
        self.ethereum_chain_id = Some(chain_id);
        self
    }

    /// Chain context used when signing with this config
    pub fn chain_context(&self) -> ChainContext {
        let mut context = ChainContext::for_network(self.network);
        if let Some(chain_id) = self.ethereum_chain_id {
            context.ethereum_chain_id = chain_id;
        }
        context
    }
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self::new(Network::Mainnet)
    }
}
