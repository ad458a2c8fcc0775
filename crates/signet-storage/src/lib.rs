//! Signet Storage - Authoritative store of signature devices.
//!
//! This crate provides:
//! - [`DeviceRepository`], the Create/Get/List/Update contract every store
//!   must honour
//! - [`MemoryDeviceRepository`], the in-memory reference store
//!
//! # Locking
//!
//! The in-memory store guards the *set* of devices with a table-level
//! `RwLock` and each device's mutable fields with a per-record `Mutex`.
//! [`DeviceRepository::update`] holds one record lock for the duration of a
//! single mutator call, so updates to one device are serialized while other
//! devices stay unblocked. Reads copy a published snapshot under the table
//! lock and never wait on a record lock.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod error;
pub mod prelude;
pub mod memory;
pub mod repository;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryDeviceRepository;
pub use repository::{DeviceRepository, Mutator};
