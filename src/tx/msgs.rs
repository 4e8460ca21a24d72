//! Logical transaction messages and the type-URL keyed decoder

use crate::types::type_urls;
use crate::{Result, SdkError};
use cosmos_sdk_proto::cosmos::bank::v1beta1::MsgSend as ProtoMsgSend;
use cosmos_sdk_proto::cosmos::base::v1beta1::Coin as ProtoCoin;
use cosmos_sdk_proto::cosmos::staking::v1beta1::MsgBeginRedelegate as ProtoMsgBeginRedelegate;
use cosmos_sdk_proto::Any;
use prost::Message;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt;

/// A denomination and an integer amount as a decimal string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

impl From<ProtoCoin> for Coin {
    fn from(value: ProtoCoin) -> Self {
        Self {
            denom: value.denom,
            amount: value.amount,
        }
    }
}

impl From<&ProtoCoin> for Coin {
    fn from(value: &ProtoCoin) -> Self {
        Self::new(value.denom.clone(), value.amount.clone())
    }
}

impl From<Coin> for ProtoCoin {
    fn from(value: Coin) -> Self {
        Self {
            denom: value.denom,
            amount: value.amount,
        }
    }
}

/// A message that can be placed in a transaction and signed through EIP-712
pub trait Msg: fmt::Debug + Send + Sync {
    /// Protobuf type URL
    fn type_url(&self) -> &str;

    /// The JSON object embedded in the typed-data `msgs` string, `@type` first
    fn to_web3(&self) -> Value;

    /// Protobuf encoding of the message body
    fn to_proto_bytes(&self) -> Vec<u8>;

    /// Pack into an `Any` for a transaction body
    fn to_any(&self) -> Any {
        Any {
            type_url: self.type_url().to_string(),
            value: self.to_proto_bytes(),
        }
    }
}

/// Bank transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSend {
    pub from_address: String,
    pub to_address: String,
    pub amount: Vec<Coin>,
}

impl MsgSend {
    /// Transfer a single coin between two `inj` addresses
    pub fn new(
        src_injective_address: impl Into<String>,
        dst_injective_address: impl Into<String>,
        amount: Coin,
    ) -> Self {
        Self {
            from_address: src_injective_address.into(),
            to_address: dst_injective_address.into(),
            amount: vec![amount],
        }
    }

    pub fn to_proto(&self) -> ProtoMsgSend {
        ProtoMsgSend {
            from_address: self.from_address.clone(),
            to_address: self.to_address.clone(),
            amount: self.amount.iter().cloned().map(ProtoCoin::from).collect(),
        }
    }

    pub fn from_proto(proto: ProtoMsgSend) -> Self {
        Self {
            from_address: proto.from_address,
            to_address: proto.to_address,
            amount: proto.amount.into_iter().map(Coin::from).collect(),
        }
    }
}

impl Msg for MsgSend {
    fn type_url(&self) -> &str {
        type_urls::MSG_SEND
    }

    fn to_web3(&self) -> Value {
        json!({
            "@type": type_urls::MSG_SEND,
            "from_address": self.from_address,
            "to_address": self.to_address,
            "amount": self.amount,
        })
    }

    fn to_proto_bytes(&self) -> Vec<u8> {
        self.to_proto().encode_to_vec()
    }
}

/// Move a delegation from one validator to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgBeginRedelegate {
    pub delegator_address: String,
    pub validator_src_address: String,
    pub validator_dst_address: String,
    pub amount: Coin,
}

impl MsgBeginRedelegate {
    pub fn new(
        injective_address: impl Into<String>,
        src_validator_address: impl Into<String>,
        dst_validator_address: impl Into<String>,
        amount: Coin,
    ) -> Self {
        Self {
            delegator_address: injective_address.into(),
            validator_src_address: src_validator_address.into(),
            validator_dst_address: dst_validator_address.into(),
            amount,
        }
    }

    pub fn to_proto(&self) -> ProtoMsgBeginRedelegate {
        ProtoMsgBeginRedelegate {
            delegator_address: self.delegator_address.clone(),
            validator_src_address: self.validator_src_address.clone(),
            validator_dst_address: self.validator_dst_address.clone(),
            amount: Some(self.amount.clone().into()),
        }
    }

    /// A redelegation without an amount is rejected
    pub fn from_proto(proto: ProtoMsgBeginRedelegate) -> Result<Self> {
        let amount = proto
            .amount
            .ok_or(SdkError::MissingTransactionPart {
                what: "redelegation amount",
            })?;

        Ok(Self {
            delegator_address: proto.delegator_address,
            validator_src_address: proto.validator_src_address,
            validator_dst_address: proto.validator_dst_address,
            amount: amount.into(),
        })
    }
}

impl Msg for MsgBeginRedelegate {
    fn type_url(&self) -> &str {
        type_urls::MSG_BEGIN_REDELEGATE
    }

    // Wallets sign this message with camelCase protobuf object keys, unlike
    // the snake_case amino keys of MsgSend.
    fn to_web3(&self) -> Value {
        json!({
            "@type": type_urls::MSG_BEGIN_REDELEGATE,
            "delegatorAddress": self.delegator_address,
            "validatorSrcAddress": self.validator_src_address,
            "validatorDstAddress": self.validator_dst_address,
            "amount": self.amount,
        })
    }

    fn to_proto_bytes(&self) -> Vec<u8> {
        self.to_proto().encode_to_vec()
    }
}

/// Decodes the protobuf bytes of one message type
pub type DecodeFn = fn(&[u8]) -> Result<Box<dyn Msg>>;

fn decode_msg_send(bytes: &[u8]) -> Result<Box<dyn Msg>> {
    Ok(Box::new(MsgSend::from_proto(ProtoMsgSend::decode(bytes)?)))
}

fn decode_msg_begin_redelegate(bytes: &[u8]) -> Result<Box<dyn Msg>> {
    Ok(Box::new(MsgBeginRedelegate::from_proto(
        ProtoMsgBeginRedelegate::decode(bytes)?,
    )?))
}

/// Registry of message decoders keyed by type URL
///
/// `MsgDecoder::default()` knows the built-in messages; [`MsgDecoder::register`]
/// adds more.
#[derive(Clone)]
pub struct MsgDecoder {
    decoders: HashMap<String, DecodeFn>,
}

impl MsgDecoder {
    /// A registry with no decoders
    pub fn empty() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Register (or replace) the decoder for a type URL
    pub fn register(mut self, type_url: impl Into<String>, decoder: DecodeFn) -> Self {
        self.decoders.insert(type_url.into(), decoder);
        self
    }

    /// Whether a decoder exists for the type URL
    pub fn is_registered(&self, type_url: &str) -> bool {
        self.decoders.contains_key(type_url)
    }

    /// Decode a packed message into its logical form
    pub fn decode(&self, any: &Any) -> Result<Box<dyn Msg>> {
        let decoder = self
            .decoders
            .get(&any.type_url)
            .ok_or_else(|| SdkError::unrecognized_message_type(&any.type_url))?;

        decoder(&any.value)
    }
}

impl Default for MsgDecoder {
    fn default() -> Self {
        Self::empty()
            .register(type_urls::MSG_SEND, decode_msg_send)
            .register(type_urls::MSG_BEGIN_REDELEGATE, decode_msg_begin_redelegate)
    }
}

impl fmt::Debug for MsgDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut type_urls: Vec<&String> = self.decoders.keys().collect();
        type_urls.sort();
        f.debug_struct("MsgDecoder")
            .field("type_urls", &type_urls)
            .finish()
    }
}
