//! Shared vectors for unit tests

use crate::crypto::eip712::TypedData;
use serde_json::json;

pub const PRIVATE_KEY: &str = "f9db9bf330e23cb7839039e944adef6e9df447b90b503d5b4464c90bea9022f3";
pub const PUBLIC_KEY_BASE64: &str = "A13cTVZCuTg+Lwh7LuiLcgf2KG68nzEOnfFAbszCwxgT";
pub const PUBLIC_KEY_HEX: &str =
    "035ddc4d5642b9383e2f087b2ee88b7207f6286ebc9f310e9df1406eccc2c31813";
pub const ADDRESS_BECH32: &str = "inj1hkhdaj2a2clmq5jq6mspsggqs32vynpk228q3r";

/// Another account, used where a signature must not match
pub const OTHER_PRIVATE_KEY: &str =
    "0x1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727";

/// Typed-data signature of [`typed_data`] by [`PRIVATE_KEY`]
pub const SIGNATURE: &str = "0xe75db7f206927afd916b1423ed04fca37d2ac19662b220edc7d14f164b3af8f4727bb0f5b1f1372fd25675aebed92a5467cc55d2f38774a794a14bc59212c7d41c";

/// `keccak256(0x1901 || domainSeparator || structHash)` of [`typed_data`]
pub const SIGNING_HASH: &str = "e3e78ea19d0b22ddaba7e7e91aaaa4ca1b953c8a6d74c6f48fb206c31b81ee4e";

pub const ACCOUNT_NUMBER: u64 = 17;
pub const SEQUENCE: u64 = 21979;
pub const TIMEOUT_HEIGHT: u64 = 30038262;
pub const FEE_DENOM: &str = "inj";
pub const FEE_AMOUNT: &str = "71101500000000";
pub const GAS_LIMIT: u64 = 142203;
pub const FEE_PAYER: &str = "inj17gkuet8f6pssxd8nycm3qr9d9y699rupv6397z";

pub const SPOT_ORDER_TYPE_URL: &str = "/injective.exchange.v1beta1.MsgCreateSpotMarketOrder";

pub const CONTEXT: &str = r#"{"account_number":17,"chain_id":"injective-888","fee":{"amount":[{"denom":"inj","amount":"71101500000000"}],"gas":142203,"payer":"inj17gkuet8f6pssxd8nycm3qr9d9y699rupv6397z"},"memo":"","sequence":21979,"timeout_height":30038262}"#;

pub const SPOT_ORDER: &str = r#"{"@type":"/injective.exchange.v1beta1.MsgCreateSpotMarketOrder","sender":"inj1hkhdaj2a2clmq5jq6mspsggqs32vynpk228q3r","order":{"market_id":"0x0611780ba69656949525013d947713300f56c37b6175e02f26bffa495c3208fe","order_info":{"subaccount_id":"0xbdaedec95d563fb05240d6e01821008454c24c36000000000000000000000000","fee_recipient":"inj1jv65s3grqf6v6jl3dp4t6c9t9rk99cd8dkncm8","price":"0.000000000024039000","quantity":"41000000000000000.000000000000000000","cid":""},"order_type":"BUY","trigger_price":"0.000000000000000000"}}"#;

/// A testnet spot market order wrapped in the `Tx { context, msgs }` template
pub fn typed_data() -> TypedData {
    let document = json!({
        "types": {
            "EIP712Domain": [
                {"name": "name", "type": "string"},
                {"name": "version", "type": "string"},
                {"name": "chainId", "type": "uint256"},
                {"name": "verifyingContract", "type": "address"},
                {"name": "salt", "type": "string"}
            ],
            "Tx": [
                {"name": "context", "type": "string"},
                {"name": "msgs", "type": "string"}
            ]
        },
        "primaryType": "Tx",
        "domain": {
            "name": "Injective Web3",
            "version": "1.0.0",
            "chainId": "0xaa36a7",
            "verifyingContract": "0xCcCCccccCCCCcCCCCCCcCcCccCcCCCcCcccccccC",
            "salt": "0"
        },
        "message": {
            "context": CONTEXT,
            "msgs": format!("[{}]", SPOT_ORDER)
        }
    });

    serde_json::from_value(document).expect("fixture document is well formed")
}
