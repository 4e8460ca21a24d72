//! ADR-36 sign docs for signing arbitrary off-chain data

use crate::Result;
use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;

/// Amino message type for arbitrary data
pub const MSG_SIGN_DATA_TYPE: &str = "sign/MsgSignData";

#[derive(Serialize)]
struct SignDataValue<'a> {
    data: String,
    signer: &'a str,
}

#[derive(Serialize)]
struct SignDataMsg<'a> {
    #[serde(rename = "type")]
    msg_type: &'static str,
    value: SignDataValue<'a>,
}

#[derive(Serialize)]
struct EmptyFee {
    amount: [(); 0],
    gas: &'static str,
}

// Fields are declared in sorted order; amino JSON sign docs sort their keys
#[derive(Serialize)]
struct SignDoc<'a> {
    account_number: &'static str,
    chain_id: &'static str,
    fee: EmptyFee,
    memo: &'static str,
    msgs: [SignDataMsg<'a>; 1],
    sequence: &'static str,
}

/// A serialized ADR-36 sign doc
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArbitrarySignDoc {
    json: String,
}

impl ArbitrarySignDoc {
    /// The sign doc as compact JSON
    pub fn as_str(&self) -> &str {
        &self.json
    }

    /// The bytes that get hashed and signed
    pub fn as_bytes(&self) -> &[u8] {
        self.json.as_bytes()
    }
}

/// Wrap arbitrary data in an ADR-36 sign doc for `signer` (an `inj` address).
///
/// The doc has zero account number and sequence, an empty chain id and no
/// fee, so it can never be replayed as a transaction.
pub fn generate_arbitrary_sign_doc(
    message: impl AsRef<[u8]>,
    signer: &str,
) -> Result<ArbitrarySignDoc> {
    let sign_doc = SignDoc {
        account_number: "0",
        chain_id: "",
        fee: EmptyFee {
            amount: [],
            gas: "0",
        },
        memo: "",
        msgs: [SignDataMsg {
            msg_type: MSG_SIGN_DATA_TYPE,
            value: SignDataValue {
                data: general_purpose::STANDARD.encode(message),
                signer,
            },
        }],
        sequence: "0",
    };

    Ok(ArbitrarySignDoc {
        json: serde_json::to_string(&sign_doc)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_doc_layout() {
        let sign_doc = generate_arbitrary_sign_doc(
            "hello",
            "inj1hkhdaj2a2clmq5jq6mspsggqs32vynpk228q3r",
        )
        .unwrap();

        assert_eq!(
            sign_doc.as_str(),
            r#"{"account_number":"0","chain_id":"","fee":{"amount":[],"gas":"0"},"memo":"","msgs":[{"type":"sign/MsgSignData","value":{"data":"aGVsbG8=","signer":"inj1hkhdaj2a2clmq5jq6mspsggqs32vynpk228q3r"}}],"sequence":"0"}"#
        );
        assert_eq!(sign_doc.as_bytes(), sign_doc.as_str().as_bytes());
    }

    #[test]
    fn test_binary_payload_is_base64() {
        let sign_doc = generate_arbitrary_sign_doc([0u8, 255, 16], "inj1signer").unwrap();
        assert!(sign_doc.as_str().contains(r#""data":"AP8Q""#));
    }
}
