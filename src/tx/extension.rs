//! The web3 extension option and chain context resolution

use crate::types::{type_urls, ChainContext};
use crate::Result;
use cosmos_sdk_proto::cosmos::tx::v1beta1::TxBody;
use cosmos_sdk_proto::Any;
use prost::Message;
use tracing::{debug, warn};

/// `injective.types.v1beta1.ExtensionOptionsWeb3Tx`
///
/// Attached by wallets that sign through EIP-712; `typed_data_chain_id` is
/// the ethereum chain id of the signed domain.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExtensionOptionsWeb3Tx {
    #[prost(uint64, tag = "1")]
    pub typed_data_chain_id: u64,
    #[prost(string, tag = "2")]
    pub fee_payer: String,
    #[prost(bytes = "vec", tag = "3")]
    pub fee_payer_sig: Vec<u8>,
}

impl ExtensionOptionsWeb3Tx {
    /// Extension for a self-paid transaction
    pub fn new(typed_data_chain_id: u64) -> Self {
        Self {
            typed_data_chain_id,
            ..Default::default()
        }
    }

    /// Pack into an extension option
    pub fn to_any(&self) -> Any {
        Any {
            type_url: type_urls::EXTENSION_OPTIONS_WEB3_TX.to_string(),
            value: self.encode_to_vec(),
        }
    }
}

/// Where a transaction's chain context came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainContextSource {
    /// The body has no extension options
    NoExtensions,
    /// Extension options exist but none is the web3 extension
    Unmatched,
    /// The web3 extension names the typed-data chain id
    Web3Extension { typed_data_chain_id: u64 },
}

impl ChainContextSource {
    /// Inspect the extension options of a transaction body
    pub fn from_body(body: &TxBody) -> Result<Self> {
        if body.extension_options.is_empty() {
            return Ok(Self::NoExtensions);
        }

        let extension = body
            .extension_options
            .iter()
            .find(|option| option.type_url.contains(type_urls::WEB3_EXTENSION_MARKER));

        match extension {
            Some(option) => {
                let decoded = ExtensionOptionsWeb3Tx::decode(option.value.as_slice())?;
                Ok(Self::Web3Extension {
                    typed_data_chain_id: decoded.typed_data_chain_id,
                })
            }
            None => Ok(Self::Unmatched),
        }
    }

    /// The chain context this source selects
    pub fn chain_context(&self) -> ChainContext {
        match self {
            Self::NoExtensions | Self::Unmatched => ChainContext::mainnet(),
            Self::Web3Extension {
                typed_data_chain_id,
            } => ChainContext::from_ethereum_chain_id(*typed_data_chain_id),
        }
    }
}

/// Determine the cosmos and ethereum chain ids a transaction was signed for
pub fn resolve_chain_context(body: &TxBody) -> Result<ChainContext> {
    let source = ChainContextSource::from_body(body)?;

    if source == ChainContextSource::Unmatched {
        let type_urls: Vec<&str> = body
            .extension_options
            .iter()
            .map(|option| option.type_url.as_str())
            .collect();
        warn!(
            extension_options = ?type_urls,
            "No web3 extension among extension options, assuming mainnet"
        );
    }

    let context = source.chain_context();
    debug!(
        ?source,
        chain_id = %context.chain_id,
        ethereum_chain_id = context.ethereum_chain_id,
        "Resolved chain context"
    );

    Ok(context)
}
