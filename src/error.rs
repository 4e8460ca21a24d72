//! Error types for the Injective SDK

use thiserror::Error;

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

/// Errors produced by key handling, signing and verification
#[derive(Error, Debug)]
pub enum SdkError {
    /// Private key bytes or hex could not be parsed into a valid scalar
    #[error("Invalid private key: {message}")]
    InvalidPrivateKey { message: String },

    /// Mnemonic phrase failed BIP-39 validation
    #[error("Invalid mnemonic: {message}")]
    InvalidMnemonic { message: String },

    /// BIP-32 derivation path is malformed or derivation failed
    #[error("Invalid derivation path: {message}")]
    InvalidDerivationPath { message: String },

    /// Public key is not a valid curve point
    #[error("Invalid public key: {message}")]
    InvalidPublicKey { message: String },

    /// Address could not be decoded
    #[error("Invalid address: {message}")]
    InvalidAddress { message: String },

    /// Signature bytes are structurally malformed
    #[error("Invalid signature: {message}")]
    InvalidSignature { message: String },

    /// EIP-712 document is missing fields or has undecodable values
    #[error("Invalid typed data: {message}")]
    InvalidTypedData { message: String },

    /// Transaction carries more than one signer
    #[error("Validation of multiple signers is not supported (signer infos: {signer_infos}, signatures: {signatures})")]
    MultipleSignersNotSupported {
        signer_infos: usize,
        signatures: usize,
    },

    /// Transaction carries more than one message
    #[error("Validation of multiple messages is not supported (messages: {count})")]
    MultipleMessagesNotSupported { count: usize },

    /// Transaction carries no signer info, signature or message to verify
    #[error("Transaction is missing {what}")]
    MissingTransactionPart { what: &'static str },

    /// No decoder is registered for the type URL
    #[error("Unrecognized message type: {type_url}")]
    UnrecognizedMessageType { type_url: String },

    /// Protobuf decoding failed
    #[error("Decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Hex decoding error
    #[error("Hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Base64 decoding error
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
}

impl SdkError {
    /// Create a new invalid private key error
    pub fn invalid_private_key(message: impl Into<String>) -> Self {
        Self::InvalidPrivateKey {
            message: message.into(),
        }
    }

    /// Create a new invalid mnemonic error
    pub fn invalid_mnemonic(message: impl Into<String>) -> Self {
        Self::InvalidMnemonic {
            message: message.into(),
        }
    }

    /// Create a new invalid derivation path error
    pub fn invalid_derivation_path(message: impl Into<String>) -> Self {
        Self::InvalidDerivationPath {
            message: message.into(),
        }
    }

    /// Create a new invalid public key error
    pub fn invalid_public_key(message: impl Into<String>) -> Self {
        Self::InvalidPublicKey {
            message: message.into(),
        }
    }

    /// Create a new invalid address error
    pub fn invalid_address(message: impl Into<String>) -> Self {
        Self::InvalidAddress {
            message: message.into(),
        }
    }

    /// Create a new invalid signature error
    pub fn invalid_signature(message: impl Into<String>) -> Self {
        Self::InvalidSignature {
            message: message.into(),
        }
    }

    /// Create a new invalid typed data error
    pub fn invalid_typed_data(message: impl Into<String>) -> Self {
        Self::InvalidTypedData {
            message: message.into(),
        }
    }

    /// Create a new unrecognized message type error
    pub fn unrecognized_message_type(type_url: impl Into<String>) -> Self {
        Self::UnrecognizedMessageType {
            type_url: type_url.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error is an unsupported-usage rejection rather than bad input
    pub fn is_unsupported_usage(&self) -> bool {
        matches!(
            self,
            Self::MultipleSignersNotSupported { .. } | Self::MultipleMessagesNotSupported { .. }
        )
    }
}
