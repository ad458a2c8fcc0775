//! Cryptographic error types.

use signet_core::DeviceError;
use thiserror::Error;

/// Errors that can occur during cryptographic operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key pair generation failed.
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// Public key could not be encoded as PEM.
    #[error("public key encoding failed: {0}")]
    Encoding(String),

    /// The signing primitive reported a failure.
    #[error("signing failed: {0}")]
    Signing(String),

    /// A PEM public key could not be parsed.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),
}

/// Result type for cryptographic operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

impl From<CryptoError> for DeviceError {
    fn from(err: CryptoError) -> Self {
        DeviceError::unexpected(err)
    }
}
