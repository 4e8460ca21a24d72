//! Signature verification
//!
//! Typed-data signatures are checked by recovering the signer's key from the
//! signature and comparing it with the expected key. A mismatch is
//! `Ok(false)`; only structurally malformed input is an error.
//!
//! [`CosmosTxVerifier`] rebuilds the typed-data document a wallet must have
//! signed for a `TxRaw` and checks the transaction's signature against it.

use crate::accounts::PublicKey;
use crate::crypto::eip712::TypedData;
use crate::crypto::encoding::{canonical_hex, decode_hex, to_prefixed_hex};
use crate::crypto::signature::{hash_message, verify_prehash, RecoverableSignature};
use crate::tx::eip712::{Eip712Args, Eip712V2Builder, TxMetadata, TypedDataBuilder};
use crate::tx::extension::resolve_chain_context;
use crate::tx::msgs::MsgDecoder;
use crate::tx::parts::TxParts;
use crate::{Result, SdkError};
use base64::{engine::general_purpose, Engine as _};
use cosmos_sdk_proto::cosmos::tx::v1beta1::TxRaw;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Verify an EIP-712 signature against a hex public key.
///
/// The key may be compressed (33 bytes) or uncompressed (65 bytes), with or
/// without `0x`, in any case. Both sides are compared in canonical `0x`
/// lowercase form; any other key length never matches.
pub fn verify_signature(signature: &str, typed_data: &TypedData, public_key: &str) -> Result<bool> {
    let signature = RecoverableSignature::from_hex(signature)?;
    let digest = typed_data.signing_hash()?;
    let expected = canonical_hex(public_key);
    decode_hex(&expected).map_err(|_| SdkError::invalid_public_key("Invalid hex public key"))?;

    let recovered = match signature.recover(&digest) {
        Some(key) => PublicKey::from(key),
        None => {
            debug!("No public key recoverable from signature");
            return Ok(false);
        }
    };

    let matches = expected == recovered.to_hex()
        || expected == to_prefixed_hex(recovered.to_uncompressed_bytes());

    debug!(recovered = %recovered.to_hex(), matches, "Verified typed-data signature");
    Ok(matches)
}

/// Verify a 64-byte `r || s` signature over keccak-256 of an ADR-36 sign doc
pub fn verify_arbitrary_signature(
    signature: &str,
    sign_doc: impl AsRef<[u8]>,
    public_key: &str,
) -> Result<bool> {
    let signature = decode_hex(signature)
        .map_err(|_| SdkError::invalid_signature("Invalid hex signature"))?;
    let public_key = PublicKey::from_hex(public_key)?;
    let digest = hash_message(sign_doc.as_ref());

    let matches = verify_prehash(public_key.verifying_key(), &digest, &signature)?;
    debug!(public_key = %public_key.to_hex(), matches, "Verified arbitrary signature");
    Ok(matches)
}

/// The account a cosmos transaction is expected to be signed by
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmosSigner {
    pub account_number: u64,
    /// Compressed public key, base64
    pub public_key: String,
}

impl CosmosSigner {
    pub fn new(account_number: u64, public_key: impl Into<String>) -> Self {
        Self {
            account_number,
            public_key: public_key.into(),
        }
    }
}

/// Verifies cosmos transactions signed through the EIP-712 wrapper
pub struct CosmosTxVerifier {
    decoder: MsgDecoder,
    builder: Box<dyn TypedDataBuilder>,
}

impl CosmosTxVerifier {
    /// Built-in message decoders and the `Tx { context, msgs }` template
    pub fn new() -> Self {
        Self {
            decoder: MsgDecoder::default(),
            builder: Box::new(Eip712V2Builder::new()),
        }
    }

    /// Use a different message registry
    pub fn with_decoder(mut self, decoder: MsgDecoder) -> Self {
        self.decoder = decoder;
        self
    }

    /// Use a different typed-data template
    pub fn with_builder(mut self, builder: impl TypedDataBuilder + 'static) -> Self {
        self.builder = Box::new(builder);
        self
    }

    /// Verify a transaction's lone signature
    pub fn verify(&self, tx_raw: &TxRaw, signer: &CosmosSigner) -> Result<bool> {
        let parts = TxParts::from_tx_raw(tx_raw)?;
        self.verify_parts(&parts, signer)
    }

    /// Verify already decoded transaction parts
    pub fn verify_parts(&self, parts: &TxParts, signer: &CosmosSigner) -> Result<bool> {
        let (signer_info, signature) = parts.single_signer()?;

        let messages = &parts.body.messages;
        if messages.len() > 1 {
            return Err(SdkError::MultipleMessagesNotSupported {
                count: messages.len(),
            });
        }
        let message = messages
            .first()
            .ok_or(SdkError::MissingTransactionPart { what: "message" })?;

        let context = resolve_chain_context(&parts.body)?;

        debug!(type_url = %message.type_url, "Decoding transaction message");
        let msgs = vec![self.decoder.decode(message)?];

        let typed_data = self.builder.build(&Eip712Args {
            msgs: &msgs,
            fee: parts.auth_info.fee.as_ref(),
            tx: TxMetadata {
                memo: parts.body.memo.clone(),
                account_number: signer.account_number,
                sequence: signer_info.sequence,
                timeout_height: parts.body.timeout_height,
                chain_id: context.chain_id.clone(),
            },
            ethereum_chain_id: context.ethereum_chain_id,
        })?;

        let public_key = general_purpose::STANDARD.decode(&signer.public_key)?;

        let valid = verify_signature(
            &hex::encode(signature),
            &typed_data,
            &hex::encode(public_key),
        )?;
        debug!(
            account_number = signer.account_number,
            sequence = signer_info.sequence,
            chain_id = %context.chain_id,
            valid,
            "Verified cosmos transaction signature"
        );

        Ok(valid)
    }
}

impl Default for CosmosTxVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CosmosTxVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CosmosTxVerifier")
            .field("decoder", &self.decoder)
            .finish_non_exhaustive()
    }
}

/// Verify a cosmos transaction with the built-in messages and template
pub fn verify_cosmos_signature(tx_raw: &TxRaw, signer: &CosmosSigner) -> Result<bool> {
    CosmosTxVerifier::new().verify(tx_raw, signer)
}
