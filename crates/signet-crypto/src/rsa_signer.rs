//! RSA signer: PKCS#1 v1.5 signatures over SHA-256.
//!
//! Public keys are published as PKCS#1 DER in an `RSA PUBLIC KEY` PEM block.

use std::fmt;

use rand::rngs::OsRng;
use rsa::pkcs1::{EncodeRsaPublicKey, LineEnding};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::signature::{SignatureEncoding, Signer as _, Verifier as _};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use signet_core::Algorithm;

use crate::error::{CryptoError, CryptoResult};
use crate::signer::Signer;

/// An RSA key pair bound to one device.
///
/// The private key is zeroized on drop by the `rsa` crate.
pub struct RsaSigner {
    signing_key: SigningKey<Sha256>,
    verifying_key: VerifyingKey<Sha256>,
    public_pem: String,
}

impl RsaSigner {
    /// Generate a fresh key pair of `bits` modulus length.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::KeyGeneration`] if key generation fails, or
    /// [`CryptoError::Encoding`] if the public key cannot be PEM-encoded.
    pub fn generate(bits: usize) -> CryptoResult<Self> {
        let private_key = RsaPrivateKey::new(&mut OsRng, bits)
            .map_err(|e| CryptoError::KeyGeneration(e.to_string()))?;
        Self::from_private_key(private_key)
    }

    /// Wrap an existing private key.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Encoding`] if the public key cannot be PEM-encoded.
    pub fn from_private_key(private_key: RsaPrivateKey) -> CryptoResult<Self> {
        let public_key = RsaPublicKey::from(&private_key);
        let public_pem = public_key
            .to_pkcs1_pem(LineEnding::LF)
            .map_err(|e| CryptoError::Encoding(e.to_string()))?;

        Ok(Self {
            signing_key: SigningKey::<Sha256>::new(private_key),
            verifying_key: VerifyingKey::<Sha256>::new(public_key),
            public_pem,
        })
    }
}

impl Signer for RsaSigner {
    fn sign(&self, payload: &[u8]) -> CryptoResult<Vec<u8>> {
        let signature = self
            .signing_key
            .try_sign(payload)
            .map_err(|e| CryptoError::Signing(e.to_string()))?;
        Ok(signature.to_vec())
    }

    fn verify(&self, payload: &[u8], signature: &[u8]) -> bool {
        let Ok(signature) = Signature::try_from(signature) else {
            return false;
        };
        self.verifying_key.verify(payload, &signature).is_ok()
    }

    fn public_pem(&self) -> &str {
        &self.public_pem
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Rsa
    }
}

impl fmt::Debug for RsaSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaSigner").finish_non_exhaustive()
    }
}
