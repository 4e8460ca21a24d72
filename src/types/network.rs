//! Network and chain-id pairing types

use serde::{Deserialize, Serialize};

/// Ethereum chain ids used as the EIP-712 domain `chainId`
pub mod ethereum_chain_id {
    /// Ethereum mainnet
    pub const MAINNET: u64 = 1;
    /// Goerli testnet
    pub const GOERLI: u64 = 5;
    /// Kovan testnet
    pub const KOVAN: u64 = 42;
    /// Sepolia testnet
    pub const SEPOLIA: u64 = 11155111;

    /// Ethereum chain ids that pair with the Injective testnet
    pub const TEST_NETWORKS: [u64; 3] = [GOERLI, KOVAN, SEPOLIA];

    /// Check whether an ethereum chain id belongs to a test network
    pub fn is_test_network(chain_id: u64) -> bool {
        TEST_NETWORKS.contains(&chain_id)
    }
}

/// Injective network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Get the network identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }

    /// Get the cosmos chain id for this network
    pub fn chain_id(&self) -> &'static str {
        match self {
            Network::Mainnet => "injective-1",
            Network::Testnet => "injective-888",
        }
    }

    /// Get the ethereum chain id this network is paired with by default
    pub fn ethereum_chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => ethereum_chain_id::MAINNET,
            Network::Testnet => ethereum_chain_id::SEPOLIA,
        }
    }

    /// Get network by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mainnet" => Some(Network::Mainnet),
            "testnet" => Some(Network::Testnet),
            _ => None,
        }
    }
}

/// The cosmos chain id and ethereum chain id a transaction was signed for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainContext {
    /// Cosmos chain id, e.g. `injective-1`
    pub chain_id: String,
    /// Ethereum chain id used in the EIP-712 domain
    pub ethereum_chain_id: u64,
}

impl ChainContext {
    /// Default pairing for a network
    pub fn for_network(network: Network) -> Self {
        Self {
            chain_id: network.chain_id().to_string(),
            ethereum_chain_id: network.ethereum_chain_id(),
        }
    }

    /// Mainnet pairing (`injective-1`, ethereum mainnet)
    pub fn mainnet() -> Self {
        Self::for_network(Network::Mainnet)
    }

    /// Testnet pairing (`injective-888`, sepolia)
    pub fn testnet() -> Self {
        Self::for_network(Network::Testnet)
    }

    /// Classify an ethereum chain id taken from a signed transaction.
    ///
    /// Known test network ids map to the testnet chain id, everything else to
    /// mainnet. The ethereum chain id is kept as given.
    pub fn from_ethereum_chain_id(ethereum_chain_id: u64) -> Self {
        let network = if ethereum_chain_id::is_test_network(ethereum_chain_id) {
            Network::Testnet
        } else {
            Network::Mainnet
        };

        Self {
            chain_id: network.chain_id().to_string(),
            ethereum_chain_id,
        }
    }
}

impl Default for ChainContext {
    fn default() -> Self {
        Self::mainnet()
    }
}
