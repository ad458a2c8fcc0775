//! Prelude module - commonly used types for convenient import.
//!
//! Use `use signet_core::prelude::*;` to import all essential types.
//!
//! # Example
//!
//! ```rust
//! use signet_core::prelude::*;
//!
//! let algorithm: Algorithm = "RSA".parse().unwrap();
//! let device = SignatureDevice::new("dev-1", algorithm, "", "PEM");
//! assert_eq!(device.signature_counter, 0);
//! ```

// Errors
pub use crate::{BoxError, DeviceError, DeviceResult, ErrorKind};

// Domain types
pub use crate::{Algorithm, SignatureDevice, SignatureResult, genesis_value};

// Identifier generation
pub use crate::{IdGenerator, UuidV4};
