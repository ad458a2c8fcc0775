//! The signing capability a device is bound to.

use std::fmt;
use std::sync::Arc;

use signet_core::Algorithm;

use crate::error::CryptoResult;

/// A signing capability holding private key material.
///
/// Signers know nothing about chains or counters: they sign whatever
/// payload they are handed. Implementations must not expose key material
/// through `Debug`.
pub trait Signer: Send + Sync + fmt::Debug {
    /// Sign `payload`, returning raw signature bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Signing`](crate::CryptoError::Signing) if the
    /// underlying primitive fails.
    fn sign(&self, payload: &[u8]) -> CryptoResult<Vec<u8>>;

    /// Check `signature` over `payload` against this signer's public key.
    fn verify(&self, payload: &[u8], signature: &[u8]) -> bool;

    /// PEM encoding of the public key.
    fn public_pem(&self) -> &str;

    /// Algorithm this signer implements.
    fn algorithm(&self) -> Algorithm;
}

/// Shared handle to a signer, as held by the repository.
pub type SharedSigner = Arc<dyn Signer>;
