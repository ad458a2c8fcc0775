//! Prelude module - commonly used types for convenient import.
//!
//! Use `use signet_crypto::prelude::*;` to import all essential types.

// Errors
pub use crate::{CryptoError, CryptoResult};

// Signers
pub use crate::{EcdsaSigner, RsaSigner, SharedSigner, Signer};

// Construction
pub use crate::{DefaultSignerFactory, RSA_KEY_BITS, SignerFactory};

// Verification
pub use crate::verify_with_public_pem;
