//! Validator key material: P-256 ECDSA signing and verification.
//!
//! Each validator owns exactly one key pair. The private half never leaves
//! this module: it is not cloneable, not serializable, and redacted from
//! `Debug` output. Only the compressed SEC1 public key is shared so that
//! other chains and parties can verify signatures independently.

use crate::validator::error::{KeyError, SigningError};
use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use rand_core::{OsRng, RngCore};
use std::fmt;

/// An asymmetric P-256 key pair bound to one validator.
pub struct KeyMaterial {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl KeyMaterial {
    /// Generate a fresh key pair from the system RNG.
    ///
    /// Fallible on RNG exhaustion or an out-of-range scalar; either is
    /// fatal to bootstrap.
    pub fn generate() -> Result<Self, KeyError> {
        let mut scalar = [0u8; 32];
        OsRng
            .try_fill_bytes(&mut scalar)
            .map_err(|e| KeyError::Rng(e.to_string()))?;

        let signing_key =
            SigningKey::from_bytes(&scalar.into()).map_err(|_| KeyError::InvalidScalar)?;
        let verifying_key = *signing_key.verifying_key();

        Ok(Self {
            signing_key,
            verifying_key,
        })
    }

    /// Sign `payload` with ECDSA over the SHA-256 digest (RFC 6979
    /// deterministic nonces, so equal payloads yield equal signatures).
    ///
    /// Returns the fixed-size 64-byte signature encoding.
    pub fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, SigningError> {
        let signature: Signature = self
            .signing_key
            .try_sign(payload)
            .map_err(|e| SigningError::Ecdsa(e.to_string()))?;
        Ok(signature.to_bytes().to_vec())
    }

    /// Verify `signature` over `payload` against this key pair's public key.
    ///
    /// Pure; malformed signature bytes yield `false`, never a panic.
    pub fn verify(&self, payload: &[u8], signature: &[u8]) -> bool {
        let Ok(sig) = Signature::from_slice(signature) else {
            return false;
        };
        self.verifying_key.verify(payload, &sig).is_ok()
    }

    /// Compressed SEC1 public key (33 bytes), safe to share.
    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.verifying_key.to_sec1_bytes().to_vec()
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("signing_key", &"<redacted>")
            .field("public_key", &hex::encode(self.public_key_bytes()))
            .finish()
    }
}

/// Verify a signature against an explicit SEC1-encoded public key.
///
/// For external parties that hold only the public-key directory entry,
/// not a validator handle. Any decode failure yields `false`.
pub fn verify_detached(payload: &[u8], signature: &[u8], public_key_sec1: &[u8]) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_sec1_bytes(public_key_sec1) else {
        return false;
    };
    let Ok(sig) = Signature::from_slice(signature) else {
        return false;
    };
    verifying_key.verify(payload, &sig).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_and_verify_round_trip() {
        let keys = KeyMaterial::generate().unwrap();
        let sig = keys.sign(b"bridge payload").unwrap();
        assert_eq!(sig.len(), 64);
        assert!(keys.verify(b"bridge payload", &sig));
    }

    #[test]
    fn signing_is_deterministic() {
        let keys = KeyMaterial::generate().unwrap();
        let a = keys.sign(b"same payload").unwrap();
        let b = keys.sign(b"same payload").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tampered_payload_fails_verification() {
        let keys = KeyMaterial::generate().unwrap();
        let sig = keys.sign(b"original").unwrap();
        assert!(!keys.verify(b"0riginal", &sig));
    }

    #[test]
    fn malformed_signature_is_rejected_not_panicked() {
        let keys = KeyMaterial::generate().unwrap();
        assert!(!keys.verify(b"payload", b"not a signature"));
        assert!(!keys.verify(b"payload", &[]));
        assert!(!keys.verify(b"payload", &[0u8; 64]));
    }

    #[test]
    fn detached_verification_requires_matching_key() {
        let signer = KeyMaterial::generate().unwrap();
        let other = KeyMaterial::generate().unwrap();
        let sig = signer.sign(b"payload").unwrap();

        assert!(verify_detached(b"payload", &sig, &signer.public_key_bytes()));
        assert!(!verify_detached(b"payload", &sig, &other.public_key_bytes()));
        assert!(!verify_detached(b"payload", &sig, b"garbage key"));
    }

    #[test]
    fn debug_output_redacts_private_key() {
        let keys = KeyMaterial::generate().unwrap();
        let rendered = format!("{:?}", keys);
        assert!(rendered.contains("<redacted>"));
    }
}
