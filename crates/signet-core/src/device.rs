//! The signature device aggregate and its chain arithmetic.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::DeviceError;

/// Signing algorithm bound to a device at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// RSA, 2048-bit keys, PKCS#1 v1.5 over SHA-256.
    #[serde(rename = "RSA")]
    Rsa,
    /// ECDSA on P-256 over SHA-256, ASN.1 DER signatures.
    #[serde(rename = "ECC")]
    Ecc,
}

impl Algorithm {
    /// Wire name of the algorithm (`"RSA"` or `"ECC"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rsa => "RSA",
            Self::Ecc => "ECC",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = DeviceError;

    /// Parse a wire name. Matching is exact: `"rsa"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RSA" => Ok(Self::Rsa),
            "ECC" => Ok(Self::Ecc),
            other => Err(DeviceError::InvalidAlgorithm(other.to_owned())),
        }
    }
}

/// Chain predecessor of a device's first signature: `base64(id)`.
#[must_use]
pub fn genesis_value(id: &str) -> String {
    base64::engine::general_purpose::STANDARD.encode(id.as_bytes())
}

/// A signature device.
///
/// `id`, `algorithm` and `public_key` are fixed at creation. Only the
/// signing operation moves `signature_counter` and `last_signature`, and it
/// moves them together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureDevice {
    /// Unique, immutable identifier.
    pub id: String,
    /// Algorithm of the bound signer.
    pub algorithm: Algorithm,
    /// Free-form label.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    /// Number of successful signatures produced so far.
    pub signature_counter: u64,
    /// Base64 of the most recent signature; empty before the first one.
    #[serde(rename = "last_signature_base64")]
    pub last_signature: String,
    /// PEM-encoded public key of the bound signer.
    #[serde(rename = "public_key_pem")]
    pub public_key: String,
}

impl SignatureDevice {
    /// Create a device that has not signed anything yet.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        algorithm: Algorithm,
        label: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            algorithm,
            label: label.into(),
            signature_counter: 0,
            last_signature: String::new(),
            public_key: public_key.into(),
        }
    }

    /// The value the next signature will chain onto.
    #[must_use]
    pub fn chain_predecessor(&self) -> String {
        if self.signature_counter == 0 {
            genesis_value(&self.id)
        } else {
            self.last_signature.clone()
        }
    }

    /// Build the exact payload the next signature covers:
    /// `"{counter}_{data}_{previous}"`.
    #[must_use]
    pub fn next_payload(&self, data: &str) -> String {
        format!(
            "{}_{}_{}",
            self.signature_counter,
            data,
            self.chain_predecessor()
        )
    }
}

/// Outcome of one chain-advancing signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureResult {
    /// Base64 of the raw signature bytes.
    pub signature: String,
    /// The exact payload that was signed.
    pub signed_data: String,
}
