//! Signet Core - Domain types for tamper-evident signature devices.
//!
//! This crate provides:
//! - [`SignatureDevice`], the aggregate whose signature chain the service advances
//! - [`Algorithm`], the closed set of supported signing algorithms
//! - [`DeviceError`], the error taxonomy every layer reports through
//! - [`IdGenerator`] for callers that need fresh device identifiers
//!
//! # Signature Chain
//!
//! Every signature a device produces covers the payload
//! `"{counter}_{data}_{previous}"`, where `previous` is the device's last
//! signature or, before the first one, the genesis value `base64(id)`.
//! Omitting or reordering a signature is therefore detectable by replaying
//! the chain from the start.
//!
//! # Example
//!
//! ```
//! use signet_core::{Algorithm, SignatureDevice, genesis_value};
//!
//! let device = SignatureDevice::new("dev-1", Algorithm::Ecc, "till 3", "PEM");
//! assert_eq!(device.chain_predecessor(), genesis_value("dev-1"));
//! assert_eq!(device.next_payload("hello"), "0_hello_ZGV2LTE=");
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod device;
mod error;
mod id;

pub use device::{Algorithm, SignatureDevice, SignatureResult, genesis_value};
pub use error::{BoxError, DeviceError, DeviceResult, ErrorKind};
pub use id::{IdGenerator, UuidV4};
