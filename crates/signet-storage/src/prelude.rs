//! Prelude module - commonly used types for convenient import.
//!
//! Use `use signet_storage::prelude::*;` to import all essential types.

pub use crate::{DeviceRepository, MemoryDeviceRepository, Mutator, StorageError, StorageResult};
