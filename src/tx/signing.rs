//! Signing transactions through the EIP-712 wrapper

use super::eip712::{Eip712Args, Eip712V2Builder, TxMetadata, TypedDataBuilder};
use super::extension::ExtensionOptionsWeb3Tx;
use super::msgs::Msg;
use crate::accounts::{PrivateKey, PublicKey};
use crate::crypto::eip712::TypedData;
use crate::types::ChainContext;
use crate::Result;
use async_trait::async_trait;
use cosmos_sdk_proto::cosmos::tx::signing::v1beta1::SignMode;
use cosmos_sdk_proto::cosmos::tx::v1beta1::{mode_info, AuthInfo, Fee, ModeInfo, SignerInfo, TxBody, TxRaw};
use prost::Message;
use tracing::debug;

/// Something that can sign on behalf of an account
///
/// Local keys answer immediately; remote signers (hardware wallets, browser
/// extensions) may suspend while waiting for approval.
#[async_trait]
pub trait Signer: Send + Sync {
    /// Public key of the signing account
    fn public_key(&self) -> PublicKey;

    /// Sign an EIP-712 document, returning `r || s || v`
    async fn sign_typed_data(&self, typed_data: &TypedData) -> Result<[u8; 65]>;

    /// Keccak-256 and sign arbitrary bytes, returning `r || s`
    async fn sign_bytes(&self, bytes: &[u8]) -> Result<[u8; 64]>;
}

#[async_trait]
impl Signer for PrivateKey {
    fn public_key(&self) -> PublicKey {
        self.to_public_key()
    }

    async fn sign_typed_data(&self, typed_data: &TypedData) -> Result<[u8; 65]> {
        PrivateKey::sign_typed_data(self, typed_data)
    }

    async fn sign_bytes(&self, bytes: &[u8]) -> Result<[u8; 64]> {
        self.sign(bytes)
    }
}

/// A transaction to sign through EIP-712
#[derive(Debug)]
pub struct Eip712TxRequest {
    pub msgs: Vec<Box<dyn Msg>>,
    pub fee: Fee,
    pub memo: String,
    pub account_number: u64,
    pub sequence: u64,
    pub timeout_height: u64,
    pub chain_context: ChainContext,
}

impl Eip712TxRequest {
    pub fn new(
        msgs: Vec<Box<dyn Msg>>,
        fee: Fee,
        account_number: u64,
        sequence: u64,
        chain_context: ChainContext,
    ) -> Self {
        Self {
            msgs,
            fee,
            memo: String::new(),
            account_number,
            sequence,
            timeout_height: 0,
            chain_context,
        }
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    pub fn with_timeout_height(mut self, timeout_height: u64) -> Self {
        self.timeout_height = timeout_height;
        self
    }

    /// The typed-data document this request signs
    pub fn typed_data(&self, builder: &dyn TypedDataBuilder) -> Result<TypedData> {
        builder.build(&Eip712Args {
            msgs: &self.msgs,
            fee: Some(&self.fee),
            tx: TxMetadata {
                memo: self.memo.clone(),
                account_number: self.account_number,
                sequence: self.sequence,
                timeout_height: self.timeout_height,
                chain_id: self.chain_context.chain_id.clone(),
            },
            ethereum_chain_id: self.chain_context.ethereum_chain_id,
        })
    }
}

/// Sign a transaction with the `Tx { context, msgs }` template
pub async fn sign_eip712_tx<S>(signer: &S, request: &Eip712TxRequest) -> Result<TxRaw>
where
    S: Signer + ?Sized,
{
    sign_eip712_tx_with(signer, request, &Eip712V2Builder::new()).await
}

/// Sign a transaction with a custom typed-data template.
///
/// The body carries the web3 extension so verifiers can recover the
/// ethereum chain id; the signer info uses `SIGN_MODE_LEGACY_AMINO_JSON`.
pub async fn sign_eip712_tx_with<S>(
    signer: &S,
    request: &Eip712TxRequest,
    builder: &dyn TypedDataBuilder,
) -> Result<TxRaw>
where
    S: Signer + ?Sized,
{
    let typed_data = request.typed_data(builder)?;
    let signature = signer.sign_typed_data(&typed_data).await?;

    let body = TxBody {
        messages: request.msgs.iter().map(|msg| msg.to_any()).collect(),
        memo: request.memo.clone(),
        timeout_height: request.timeout_height,
        extension_options: vec![
            ExtensionOptionsWeb3Tx::new(request.chain_context.ethereum_chain_id).to_any(),
        ],
        ..Default::default()
    };

    let signer_info = SignerInfo {
        public_key: Some(signer.public_key().to_any()),
        mode_info: Some(ModeInfo {
            sum: Some(mode_info::Sum::Single(mode_info::Single {
                mode: SignMode::LegacyAminoJson as i32,
            })),
        }),
        sequence: request.sequence,
    };

    let auth_info = AuthInfo {
        signer_infos: vec![signer_info],
        fee: Some(request.fee.clone()),
        ..Default::default()
    };

    debug!(
        chain_id = %request.chain_context.chain_id,
        ethereum_chain_id = request.chain_context.ethereum_chain_id,
        messages = request.msgs.len(),
        "Signed EIP-712 transaction"
    );

    Ok(TxRaw {
        body_bytes: body.encode_to_vec(),
        auth_info_bytes: auth_info.encode_to_vec(),
        signatures: vec![signature.to_vec()],
    })
}
