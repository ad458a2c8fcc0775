//! Signet Service - Orchestration of signature devices.
//!
//! [`DeviceService`] is the only component that knows the chaining
//! algorithm. It asks a [`SignerFactory`](signet_crypto::SignerFactory) for
//! key material when a device is created, and advances a device's chain
//! inside the repository's per-device critical section when asked to sign.
//!
//! # Example
//!
//! ```
//! use signet_service::DeviceService;
//!
//! let service = DeviceService::in_memory();
//! service.create_device("dev-1", "ECC", "till 3").unwrap();
//!
//! let first = service.sign("dev-1", "hello").unwrap();
//! assert_eq!(first.signed_data, "0_hello_ZGV2LTE=");
//!
//! let second = service.sign("dev-1", "again").unwrap();
//! assert_eq!(second.signed_data, format!("1_again_{}", first.signature));
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod service;

pub use service::DeviceService;
