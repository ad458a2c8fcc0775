//! Construction of signers by algorithm.

use std::sync::Arc;

use signet_core::Algorithm;
use tracing::debug;

use crate::ecdsa_signer::EcdsaSigner;
use crate::error::CryptoResult;
use crate::rsa_signer::RsaSigner;
use crate::signer::SharedSigner;

/// Modulus length for RSA keys issued to devices.
pub const RSA_KEY_BITS: usize = 2048;

/// Produces a fresh signer for a requested algorithm.
///
/// The service holds one of these so tests can substitute deterministic or
/// failing signers.
pub trait SignerFactory: Send + Sync {
    /// Create a new key pair for `algorithm`.
    ///
    /// # Errors
    ///
    /// Returns an error if key generation or public key encoding fails.
    fn create(&self, algorithm: Algorithm) -> CryptoResult<SharedSigner>;
}

/// Factory backed by the real RSA and P-256 implementations.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSignerFactory;

impl SignerFactory for DefaultSignerFactory {
    fn create(&self, algorithm: Algorithm) -> CryptoResult<SharedSigner> {
        debug!(%algorithm, "generating key pair");
        let signer: SharedSigner = match algorithm {
            Algorithm::Rsa => Arc::new(RsaSigner::generate(RSA_KEY_BITS)?),
            Algorithm::Ecc => Arc::new(EcdsaSigner::generate()?),
        };
        Ok(signer)
    }
}
