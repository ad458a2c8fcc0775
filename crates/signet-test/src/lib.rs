//! Signet Test - Shared test utilities for signet.
//!
//! This crate provides deterministic fakes and test helpers that can be
//! used across signet crates as a dev-dependency.
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! signet-test.workspace = true
//! ```
//!
//! ```rust,ignore
//! use signet_test::fake_service;
//!
//! #[test]
//! fn test_first_link() {
//!     let service = fake_service();
//!     service.create_device("dev-1", "ECC", "").unwrap();
//!
//!     let result = service.sign("dev-1", "hello").unwrap();
//!     assert_eq!(result.signed_data, "0_hello_ZGV2LTE=");
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod prelude;

pub mod fixtures;
pub mod harness;
pub mod mocks;

pub use fixtures::*;
pub use harness::*;
pub use mocks::*;
