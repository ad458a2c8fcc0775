//! Signet Crypto - Signing capabilities bound to signature devices.
//!
//! This crate provides:
//! - The [`Signer`] capability every device is paired with
//! - [`RsaSigner`]: 2048-bit RSA, PKCS#1 v1.5 over SHA-256, PKCS#1 PEM public keys
//! - [`EcdsaSigner`]: P-256 ECDSA over SHA-256, DER signatures, PKIX PEM public keys
//! - [`SignerFactory`] to build a signer for an [`Algorithm`](signet_core::Algorithm)
//! - [`verify_with_public_pem`] for consumers that only hold a published key
//!
//! # Example
//!
//! ```
//! use signet_core::Algorithm;
//! use signet_crypto::{DefaultSignerFactory, SignerFactory, verify_with_public_pem};
//!
//! let signer = DefaultSignerFactory.create(Algorithm::Ecc).unwrap();
//! let signature = signer.sign(b"0_hello_ZGV2LTE=").unwrap();
//!
//! assert!(signer.verify(b"0_hello_ZGV2LTE=", &signature));
//! assert!(
//!     verify_with_public_pem(Algorithm::Ecc, signer.public_pem(), b"0_hello_ZGV2LTE=", &signature)
//!         .unwrap()
//! );
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod ecdsa_signer;
mod error;
mod factory;
mod rsa_signer;
mod signer;
mod verify;

pub use ecdsa_signer::EcdsaSigner;
pub use error::{CryptoError, CryptoResult};
pub use factory::{DefaultSignerFactory, RSA_KEY_BITS, SignerFactory};
pub use rsa_signer::RsaSigner;
pub use signer::{SharedSigner, Signer};
pub use verify::verify_with_public_pem;
