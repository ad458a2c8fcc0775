//! Verification against a published public key.
//!
//! Consumers that only hold a device's `public_key_pem` can check its
//! signatures here without access to the signer.

use p256::pkcs8::DecodePublicKey;
use rsa::RsaPublicKey;
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::signature::Verifier as _;
use sha2::Sha256;
use signet_core::Algorithm;

use crate::error::{CryptoError, CryptoResult};

/// Verify `signature` over `payload` using a PEM-encoded public key.
///
/// RSA keys are expected in PKCS#1 form (`RSA PUBLIC KEY`), ECC keys in
/// PKIX form (`PUBLIC KEY`), matching what the signers publish.
///
/// Returns `Ok(false)` for a well-formed key and a signature that does not
/// match, including signatures that fail to decode.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidPublicKey`] if `public_pem` cannot be parsed
/// for `algorithm`.
pub fn verify_with_public_pem(
    algorithm: Algorithm,
    public_pem: &str,
    payload: &[u8],
    signature: &[u8],
) -> CryptoResult<bool> {
    match algorithm {
        Algorithm::Rsa => {
            let key = RsaPublicKey::from_pkcs1_pem(public_pem)
                .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
            let key = rsa::pkcs1v15::VerifyingKey::<Sha256>::new(key);
            let Ok(signature) = rsa::pkcs1v15::Signature::try_from(signature) else {
                return Ok(false);
            };
            Ok(key.verify(payload, &signature).is_ok())
        },
        Algorithm::Ecc => {
            let key = p256::ecdsa::VerifyingKey::from_public_key_pem(public_pem)
                .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
            let Ok(signature) = p256::ecdsa::Signature::from_der(signature) else {
                return Ok(false);
            };
            Ok(key.verify(payload, &signature).is_ok())
        },
    }
}
