//! Account keys and addresses
//!
//! # Architecture
//!
//! - [`private_key`] - [`PrivateKey`]: mnemonic/hex import, export and the signing methods
//! - [`public_key`] - [`PublicKey`]: compressed secp256k1 points and their `Any` encoding
//! - [`address`] - [`Address`]: 20-byte accounts rendered as `0x` hex or `inj` bech32
//!
//! # Examples
//!
//! ```
//! use injective_sdk::accounts::PrivateKey;
//!
//! # fn example() -> injective_sdk::Result<()> {
//! let private_key = PrivateKey::from_hex(
//!     "0xf9db9bf330e23cb7839039e944adef6e9df447b90b503d5b4464c90bea9022f3",
//! )?;
//!
//! assert_eq!(
//!     private_key.to_public_key().to_base64(),
//!     "A13cTVZCuTg+Lwh7LuiLcgf2KG68nzEOnfFAbszCwxgT"
//! );
//! assert_eq!(
//!     private_key.to_bech32(),
//!     "inj1hkhdaj2a2clmq5jq6mspsggqs32vynpk228q3r"
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod address;
pub mod private_key;
pub mod public_key;

pub use address::Address;
pub use private_key::PrivateKey;
pub use public_key::{EthSecp256k1PubKey, PublicKey};
