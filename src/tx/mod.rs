//! Cosmos transactions signed through EIP-712
//!
//! Everything needed to get from a `TxRaw` to the typed-data document its
//! signer approved, and back again when signing.
//!
//! # Architecture
//!
//! - [`parts`] - Decoding a `TxRaw` into body, auth info and signatures
//! - [`extension`] - The web3 extension option and chain context resolution
//! - [`msgs`] - Logical messages and the type-URL keyed [`MsgDecoder`]
//! - [`eip712`] - The [`TypedDataBuilder`] seam and the `Tx { context, msgs }` template
//! - [`arbitrary`] - ADR-36 sign docs for off-chain data
//! - [`signing`] - The async [`Signer`] trait and transaction signing
//!
//! # Examples
//!
//! ```no_run
//! use injective_sdk::accounts::PrivateKey;
//! use injective_sdk::tx::{sign_eip712_tx, Coin, Eip712TxRequest, MsgSend};
//! use injective_sdk::types::ChainContext;
//! use cosmos_sdk_proto::cosmos::tx::v1beta1::Fee;
//!
//! # async fn example() -> injective_sdk::Result<()> {
//! let private_key = PrivateKey::from_mnemonic("abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about", None)?;
//! let msg = MsgSend::new(
//!     private_key.to_bech32(),
//!     "inj17gkuet8f6pssxd8nycm3qr9d9y699rupv6397z",
//!     Coin::new("inj", "1000000000000000000"),
//! );
//!
//! let request = Eip712TxRequest::new(
//!     vec![Box::new(msg)],
//!     Fee { gas_limit: 200_000, ..Default::default() },
//!     17,
//!     0,
//!     ChainContext::testnet(),
//! );
//! let tx_raw = sign_eip712_tx(&private_key, &request).await?;
//! # Ok(())
//! # }
//! ```

pub mod arbitrary;
pub mod eip712;
pub mod extension;
pub mod msgs;
pub mod parts;
pub mod signing;


pub use arbitrary::{generate_arbitrary_sign_doc, ArbitrarySignDoc};
pub use eip712::{Eip712Args, Eip712V2Builder, TxMetadata, TypedDataBuilder};
pub use extension::{resolve_chain_context, ChainContextSource, ExtensionOptionsWeb3Tx};
pub use msgs::{Coin, DecodeFn, Msg, MsgBeginRedelegate, MsgDecoder, MsgSend};
pub use parts::{tx_hash, TxParts};
pub use signing::{sign_eip712_tx, sign_eip712_tx_with, Eip712TxRequest, Signer};
