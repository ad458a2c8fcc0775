//! ECDSA signer on the P-256 curve.
//!
//! Signatures are ASN.1 DER over SHA-256; public keys are published as PKIX
//! (`SubjectPublicKeyInfo`) DER in a `PUBLIC KEY` PEM block.

use std::fmt;

use p256::ecdsa::signature::{Signer as _, Verifier as _};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::pkcs8::{EncodePublicKey, LineEnding};
use rand::rngs::OsRng;
use signet_core::Algorithm;

use crate::error::{CryptoError, CryptoResult};
use crate::signer::Signer;

/// A P-256 key pair bound to one device.
///
/// The signing key is zeroized on drop by the `p256` crate.
pub struct EcdsaSigner {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
    public_pem: String,
}

impl EcdsaSigner {
    /// Generate a fresh key pair.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Encoding`] if the public key cannot be PEM-encoded.
    pub fn generate() -> CryptoResult<Self> {
        Self::from_signing_key(SigningKey::random(&mut OsRng))
    }

    /// Wrap an existing signing key.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Encoding`] if the public key cannot be PEM-encoded.
    pub fn from_signing_key(signing_key: SigningKey) -> CryptoResult<Self> {
        let verifying_key = *signing_key.verifying_key();
        let public_pem = verifying_key
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| CryptoError::Encoding(e.to_string()))?;

        Ok(Self {
            signing_key,
            verifying_key,
            public_pem,
        })
    }
}

impl Signer for EcdsaSigner {
    fn sign(&self, payload: &[u8]) -> CryptoResult<Vec<u8>> {
        let signature: Signature = self
            .signing_key
            .try_sign(payload)
            .map_err(|e| CryptoError::Signing(e.to_string()))?;
        Ok(signature.to_der().as_bytes().to_vec())
    }

    fn verify(&self, payload: &[u8], signature: &[u8]) -> bool {
        let Ok(signature) = Signature::from_der(signature) else {
            return false;
        };
        self.verifying_key.verify(payload, &signature).is_ok()
    }

    fn public_pem(&self) -> &str {
        &self.public_pem
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Ecc
    }
}

impl fmt::Debug for EcdsaSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcdsaSigner").finish_non_exhaustive()
    }
}
