//! EIP-712 templates for cosmos transactions
//!
//! The chain's typed-data verifier expects a fixed `Tx { context, msgs }`
//! document where both fields are JSON strings. The strings are compared
//! byte for byte after hashing, so key order and number formatting here are
//! part of the signature format.

use super::msgs::{Coin, Msg};
use crate::crypto::eip712::{TypedData, TypedDataField, DOMAIN_TYPE};
use crate::types::eip712_domain;
use crate::Result;
use cosmos_sdk_proto::cosmos::tx::v1beta1::Fee;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Primary type of the transaction template
pub const TX_TYPE: &str = "Tx";

/// Transaction metadata covered by the signature
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxMetadata {
    pub memo: String,
    pub account_number: u64,
    pub sequence: u64,
    pub timeout_height: u64,
    pub chain_id: String,
}

/// Everything a template needs to rebuild the signed document
#[derive(Debug)]
pub struct Eip712Args<'a> {
    pub msgs: &'a [Box<dyn Msg>],
    pub fee: Option<&'a Fee>,
    pub tx: TxMetadata,
    pub ethereum_chain_id: u64,
}

/// Builds the typed-data document a wallet signs for a transaction.
///
/// Implementations must be deterministic: identical arguments yield a
/// document with an identical signing hash.
pub trait TypedDataBuilder: Send + Sync {
    fn build(&self, args: &Eip712Args<'_>) -> Result<TypedData>;
}

/// The `Tx { context, msgs }` template with the `Injective Web3` domain
#[derive(Debug, Clone, Copy, Default)]
pub struct Eip712V2Builder;

impl Eip712V2Builder {
    pub fn new() -> Self {
        Self
    }

    fn types() -> BTreeMap<String, Vec<TypedDataField>> {
        let mut types = BTreeMap::new();
        types.insert(
            DOMAIN_TYPE.to_string(),
            vec![
                TypedDataField::new("name", "string"),
                TypedDataField::new("version", "string"),
                TypedDataField::new("chainId", "uint256"),
                TypedDataField::new("verifyingContract", "address"),
                TypedDataField::new("salt", "string"),
            ],
        );
        types.insert(
            TX_TYPE.to_string(),
            vec![
                TypedDataField::new("context", "string"),
                TypedDataField::new("msgs", "string"),
            ],
        );
        types
    }

    fn domain(ethereum_chain_id: u64) -> Value {
        json!({
            "name": eip712_domain::NAME,
            "version": eip712_domain::VERSION,
            "chainId": format!("0x{:x}", ethereum_chain_id),
            "verifyingContract": eip712_domain::VERIFYING_CONTRACT,
            "salt": eip712_domain::SALT,
        })
    }
}

#[derive(Serialize)]
struct ContextFee {
    amount: Vec<Coin>,
    gas: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    payer: String,
}

#[derive(Serialize)]
struct Context<'a> {
    account_number: u64,
    chain_id: &'a str,
    fee: ContextFee,
    memo: &'a str,
    sequence: u64,
    timeout_height: u64,
}

/// The `context` string: signer metadata and fee as compact JSON
pub fn context_json(tx: &TxMetadata, fee: Option<&Fee>) -> Result<String> {
    let fee = match fee {
        Some(fee) => ContextFee {
            amount: fee.amount.iter().map(Coin::from).collect(),
            gas: fee.gas_limit,
            payer: fee.payer.clone(),
        },
        None => ContextFee {
            amount: Vec::new(),
            gas: 0,
            payer: String::new(),
        },
    };

    let context = Context {
        account_number: tx.account_number,
        chain_id: &tx.chain_id,
        fee,
        memo: &tx.memo,
        sequence: tx.sequence,
        timeout_height: tx.timeout_height,
    };

    Ok(serde_json::to_string(&context)?)
}

/// The `msgs` string: the web3 form of every message as a compact JSON array
pub fn msgs_json(msgs: &[Box<dyn Msg>]) -> Result<String> {
    let msgs: Vec<Value> = msgs.iter().map(|msg| msg.to_web3()).collect();
    Ok(serde_json::to_string(&msgs)?)
}

impl TypedDataBuilder for Eip712V2Builder {
    fn build(&self, args: &Eip712Args<'_>) -> Result<TypedData> {
        let message = json!({
            "context": context_json(&args.tx, args.fee)?,
            "msgs": msgs_json(args.msgs)?,
        });

        Ok(TypedData::new(
            Self::types(),
            TX_TYPE,
            Self::domain(args.ethereum_chain_id),
            message,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::msgs::MsgSend;
    use cosmos_sdk_proto::cosmos::base::v1beta1::Coin as ProtoCoin;

    fn fee() -> Fee {
        Fee {
            amount: vec![ProtoCoin {
                denom: "inj".to_string(),
                amount: "71101500000000".to_string(),
            }],
            gas_limit: 142203,
            payer: "inj17gkuet8f6pssxd8nycm3qr9d9y699rupv6397z".to_string(),
            ..Default::default()
        }
    }

    fn metadata() -> TxMetadata {
        TxMetadata {
            memo: String::new(),
            account_number: 17,
            sequence: 21979,
            timeout_height: 30038262,
            chain_id: "injective-888".to_string(),
        }
    }

    #[test]
    fn test_context_json_layout() {
        let context = context_json(&metadata(), Some(&fee())).unwrap();
        assert_eq!(
            context,
            r#"{"account_number":17,"chain_id":"injective-888","fee":{"amount":[{"denom":"inj","amount":"71101500000000"}],"gas":142203,"payer":"inj17gkuet8f6pssxd8nycm3qr9d9y699rupv6397z"},"memo":"","sequence":21979,"timeout_height":30038262}"#
        );
    }

    #[test]
    fn test_context_json_omits_empty_payer() {
        let mut fee = fee();
        fee.payer.clear();
        let context = context_json(&metadata(), Some(&fee)).unwrap();
        assert!(context.contains(r#""gas":142203},"memo""#));

        let no_fee = context_json(&metadata(), None).unwrap();
        assert!(no_fee.contains(r#""fee":{"amount":[],"gas":0}"#));
    }

    #[test]
    fn test_domain() {
        let msgs: Vec<Box<dyn Msg>> = vec![Box::new(MsgSend::new(
            "inj1hkhdaj2a2clmq5jq6mspsggqs32vynpk228q3r",
            "inj17gkuet8f6pssxd8nycm3qr9d9y699rupv6397z",
            Coin::new("inj", "1"),
        ))];
        let fee = fee();
        let typed_data = Eip712V2Builder::new()
            .build(&Eip712Args {
                msgs: &msgs,
                fee: Some(&fee),
                tx: metadata(),
                ethereum_chain_id: 11155111,
            })
            .unwrap();

        assert_eq!(typed_data.primary_type, "Tx");
        assert_eq!(typed_data.domain["chainId"], "0xaa36a7");
        assert_eq!(typed_data.domain["name"], "Injective Web3");
        assert_eq!(typed_data.domain["salt"], "0");
        assert_eq!(
            typed_data.encode_type("Tx").unwrap(),
            "Tx(string context,string msgs)"
        );
        assert!(typed_data.message["msgs"]
            .as_str()
            .unwrap()
            .starts_with(r#"[{"@type":"/cosmos.bank.v1beta1.MsgSend""#));
    }

    #[test]
    fn test_build_is_deterministic() {
        let msgs: Vec<Box<dyn Msg>> = vec![Box::new(MsgSend::new(
            "inj1hkhdaj2a2clmq5jq6mspsggqs32vynpk228q3r",
            "inj17gkuet8f6pssxd8nycm3qr9d9y699rupv6397z",
            Coin::new("inj", "1"),
        ))];
        let fee = fee();
        let args = Eip712Args {
            msgs: &msgs,
            fee: Some(&fee),
            tx: metadata(),
            ethereum_chain_id: 1,
        };

        let builder = Eip712V2Builder::new();
        let first = builder.build(&args).unwrap().signing_hash().unwrap();
        let second = builder.build(&args).unwrap().signing_hash().unwrap();
        assert_eq!(first, second);
    }
}
