//! Prelude module - commonly used types for convenient import.
//!
//! Use `use signet_service::prelude::*;` to import all essential types.

pub use crate::DeviceService;

pub use signet_core::{Algorithm, DeviceError, DeviceResult, SignatureDevice, SignatureResult};
