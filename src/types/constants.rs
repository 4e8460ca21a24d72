//! Common constants for accounts, transactions and typed data

/// Default BIP-44 derivation path (ethereum coin type)
pub const DEFAULT_DERIVATION_PATH: &str = "m/44'/60'/0'/0/0";

/// Bech32 human readable prefix for account addresses
pub const BECH32_ADDR_ACC_PREFIX: &str = "inj";

/// Bech32 human readable prefix for validator operator addresses
pub const BECH32_ADDR_VAL_PREFIX: &str = "injvaloper";

/// Protobuf type URLs
pub mod type_urls {
    /// Bank send
    pub const MSG_SEND: &str = "/cosmos.bank.v1beta1.MsgSend";
    /// Staking redelegation
    pub const MSG_BEGIN_REDELEGATE: &str = "/cosmos.staking.v1beta1.MsgBeginRedelegate";
    /// Web3 extension option carrying the typed-data chain id
    pub const EXTENSION_OPTIONS_WEB3_TX: &str = "/injective.types.v1beta1.ExtensionOptionsWeb3Tx";
    /// Ethereum-flavoured secp256k1 public key
    pub const ETH_SECP256K1_PUB_KEY: &str = "/injective.crypto.v1beta1.ethsecp256k1.PubKey";

    /// Fragment used to recognize the web3 extension in an extension list
    pub const WEB3_EXTENSION_MARKER: &str = "ExtensionOptionsWeb3Tx";
}

/// EIP-712 domain values used by the chain's typed-data verifier
pub mod eip712_domain {
    /// Domain name
    pub const NAME: &str = "Injective Web3";
    /// Domain version
    pub const VERSION: &str = "1.0.0";
    /// Verifying contract placeholder
    pub const VERIFYING_CONTRACT: &str = "0xCcCCccccCCCCcCCCCCCcCcCccCcCCCcCcccccccC";
    /// Domain salt
    pub const SALT: &str = "0";
}
