//! Splitting a signed transaction into body, auth info and signatures

use crate::{Result, SdkError};
use cosmos_sdk_proto::cosmos::tx::v1beta1::{AuthInfo, SignerInfo, TxBody, TxRaw};
use prost::Message;
use sha2::{Digest, Sha256};

/// The decoded parts of a `TxRaw`
///
/// `signatures` is index-aligned with `auth_info.signer_infos`.
#[derive(Debug, Clone, PartialEq)]
pub struct TxParts {
    pub body: TxBody,
    pub auth_info: AuthInfo,
    pub signatures: Vec<Vec<u8>>,
}

impl TxParts {
    /// Decode the body and auth info bytes of a raw transaction
    pub fn from_tx_raw(tx_raw: &TxRaw) -> Result<Self> {
        let body = TxBody::decode(tx_raw.body_bytes.as_slice())?;
        let auth_info = AuthInfo::decode(tx_raw.auth_info_bytes.as_slice())?;

        Ok(Self {
            body,
            auth_info,
            signatures: tx_raw.signatures.clone(),
        })
    }

    /// Decode a protobuf-encoded `TxRaw`
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let tx_raw = TxRaw::decode(bytes)?;
        Self::from_tx_raw(&tx_raw)
    }

    /// Re-encode into a `TxRaw`
    pub fn to_tx_raw(&self) -> TxRaw {
        TxRaw {
            body_bytes: self.body.encode_to_vec(),
            auth_info_bytes: self.auth_info.encode_to_vec(),
            signatures: self.signatures.clone(),
        }
    }

    /// The lone signer info and signature of a single-signer transaction.
    ///
    /// More than one of either is rejected rather than checking only the
    /// first entry.
    pub fn single_signer(&self) -> Result<(&SignerInfo, &[u8])> {
        let signer_infos = self.auth_info.signer_infos.len();
        let signatures = self.signatures.len();

        if signer_infos > 1 || signatures > 1 {
            return Err(SdkError::MultipleSignersNotSupported {
                signer_infos,
                signatures,
            });
        }

        let signer_info = self
            .auth_info
            .signer_infos
            .first()
            .ok_or(SdkError::MissingTransactionPart { what: "signer info" })?;
        let signature = self
            .signatures
            .first()
            .ok_or(SdkError::MissingTransactionPart { what: "signature" })?;

        Ok((signer_info, signature.as_slice()))
    }
}

/// Transaction hash as shown by explorers: upper-case hex SHA-256 of the encoded `TxRaw`
pub fn tx_hash(tx_raw: &TxRaw) -> String {
    hex::encode_upper(Sha256::digest(tx_raw.encode_to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmos_sdk_proto::cosmos::tx::v1beta1::Fee;

    fn sample_parts(signers: usize, signatures: usize) -> TxParts {
        TxParts {
            body: TxBody {
                memo: "hello".to_string(),
                timeout_height: 42,
                ..Default::default()
            },
            auth_info: AuthInfo {
                signer_infos: (0..signers)
                    .map(|i| SignerInfo {
                        sequence: i as u64,
                        ..Default::default()
                    })
                    .collect(),
                fee: Some(Fee {
                    gas_limit: 200_000,
                    ..Default::default()
                }),
                ..Default::default()
            },
            signatures: (0..signatures).map(|i| vec![i as u8; 65]).collect(),
        }
    }

    #[test]
    fn test_round_trip_through_tx_raw() {
        let parts = sample_parts(1, 1);
        let tx_raw = parts.to_tx_raw();

        assert_eq!(TxParts::from_tx_raw(&tx_raw).unwrap(), parts);
        assert_eq!(TxParts::from_bytes(&tx_raw.encode_to_vec()).unwrap(), parts);
    }

    #[test]
    fn test_single_signer() {
        let parts = sample_parts(1, 1);
        let (signer_info, signature) = parts.single_signer().unwrap();
        assert_eq!(signer_info.sequence, 0);
        assert_eq!(signature.len(), 65);
    }

    #[test]
    fn test_multiple_signers_rejected() {
        assert!(matches!(
            sample_parts(2, 1).single_signer(),
            Err(SdkError::MultipleSignersNotSupported {
                signer_infos: 2,
                signatures: 1
            })
        ));
        assert!(matches!(
            sample_parts(1, 2).single_signer(),
            Err(SdkError::MultipleSignersNotSupported { .. })
        ));
    }

    #[test]
    fn test_missing_signature() {
        assert!(matches!(
            sample_parts(1, 0).single_signer(),
            Err(SdkError::MissingTransactionPart { what: "signature" })
        ));
        assert!(matches!(
            sample_parts(0, 1).single_signer(),
            Err(SdkError::MissingTransactionPart { what: "signer info" })
        ));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        assert!(matches!(
            TxParts::from_bytes(&[0xff, 0xff, 0xff]),
            Err(SdkError::Decode(_))
        ));
    }

    #[test]
    fn test_tx_hash_format() {
        let hash = tx_hash(&sample_parts(1, 1).to_tx_raw());
        assert_eq!(hash.len(), 64);
        assert_eq!(hash, hash.to_uppercase());
    }
}
