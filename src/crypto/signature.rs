//! Signature utilities

use super::eip712::keccak256;
use crate::{Result, SdkError};
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{RecoveryId, Signature as K256Signature, SigningKey, VerifyingKey};
use secp256k1::{Message, SecretKey, SECP256K1};

/// Offset added to the recovery id in `r || s || v` signatures
pub const RECOVERY_ID_OFFSET: u8 = 27;

/// Hash a message the way the chain does before signing
pub fn hash_message(message: &[u8]) -> [u8; 32] {
    keccak256(message)
}

/// Sign a 32-byte digest with k256 (RFC 6979 nonce), returning `r || s`
pub fn sign_prehash(signing_key: &SigningKey, digest: &[u8]) -> Result<[u8; 64]> {
    let (signature, _) = sign_digest(signing_key, digest)?;
    Ok(signature)
}

/// Sign a 32-byte digest with k256, returning `r || s || v` with `v` in {27, 28}
pub fn sign_prehash_recoverable(signing_key: &SigningKey, digest: &[u8]) -> Result<[u8; 65]> {
    let (signature, recovery_id) = sign_digest(signing_key, digest)?;

    let mut sig_bytes = [0u8; 65];
    sig_bytes[0..64].copy_from_slice(&signature);
    sig_bytes[64] = RECOVERY_ID_OFFSET + recovery_id;
    Ok(sig_bytes)
}

/// Sign a 32-byte digest with libsecp256k1's deterministic signer, returning `r || s`
pub fn sign_prehash_ecdsa(signing_key: &SigningKey, digest: &[u8]) -> Result<[u8; 64]> {
    let secret_key = SecretKey::from_slice(&signing_key.to_bytes())
        .map_err(|_| SdkError::invalid_private_key("Invalid private key"))?;
    let message = Message::from_digest_slice(digest)
        .map_err(|_| SdkError::invalid_signature("Message digest must be 32 bytes"))?;

    let signature = SECP256K1.sign_ecdsa(&message, &secret_key);
    Ok(signature.serialize_compact())
}

fn sign_digest(signing_key: &SigningKey, digest: &[u8]) -> Result<([u8; 64], u8)> {
    if digest.len() != 32 {
        return Err(SdkError::invalid_signature(format!(
            "Message digest must be 32 bytes, got {}",
            digest.len()
        )));
    }

    let (signature, recovery_id) = signing_key
        .sign_prehash_recoverable(digest)
        .map_err(|e| SdkError::invalid_signature(format!("Signing failed: {}", e)))?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes.copy_from_slice(&signature.to_bytes());
    Ok((sig_bytes, recovery_id.to_byte()))
}

/// A parsed `r || s || v` signature ready for public key recovery
#[derive(Debug, Clone, Copy)]
pub struct RecoverableSignature {
    signature: K256Signature,
    recovery_id: RecoveryId,
}

impl RecoverableSignature {
    /// Parse a 65-byte signature; `v` may be 0/1 or 27/28
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 65 {
            return Err(SdkError::invalid_signature(format!(
                "Signature must be 65 bytes, got {}",
                bytes.len()
            )));
        }

        let v = bytes[64];
        let v = if v >= RECOVERY_ID_OFFSET {
            v - RECOVERY_ID_OFFSET
        } else {
            v
        };
        let recovery_id =
            RecoveryId::try_from(v).map_err(|_| SdkError::invalid_signature("Invalid recovery ID"))?;

        let signature = K256Signature::try_from(&bytes[0..64])
            .map_err(|_| SdkError::invalid_signature("Invalid signature format"))?;

        // Wallets accept high-s signatures; recover from the equivalent low-s form
        let (signature, recovery_id) = match signature.normalize_s() {
            Some(normalized) => (
                normalized,
                RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
            ),
            None => (signature, recovery_id),
        };

        Ok(Self {
            signature,
            recovery_id,
        })
    }

    /// Parse a hex signature with optional `0x` prefix
    pub fn from_hex(signature: &str) -> Result<Self> {
        let bytes = super::encoding::decode_hex(signature)
            .map_err(|_| SdkError::invalid_signature("Invalid hex signature"))?;
        Self::from_bytes(&bytes)
    }

    /// Recover the signer's key for a digest; `None` if no key matches
    pub fn recover(&self, digest: &[u8; 32]) -> Option<VerifyingKey> {
        VerifyingKey::recover_from_prehash(digest, &self.signature, self.recovery_id).ok()
    }
}

/// Verify a 64-byte `r || s` signature over a digest
pub fn verify_prehash(verifying_key: &VerifyingKey, digest: &[u8; 32], signature: &[u8]) -> Result<bool> {
    if signature.len() != 64 {
        return Err(SdkError::invalid_signature(format!(
            "Signature must be 64 bytes, got {}",
            signature.len()
        )));
    }

    let signature = K256Signature::try_from(signature)
        .map_err(|_| SdkError::invalid_signature("Invalid signature format"))?;

    Ok(verifying_key.verify_prehash(digest, &signature).is_ok())
}
