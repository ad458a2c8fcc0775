//! Prelude module - commonly used types for convenient import.
//!
//! Use `use signet_gateway::prelude::*;` to import all essential types.

pub use crate::{
    CreateDeviceParams, GatewayError, GatewayResult, GatewayServer, HealthStatus, SignetRpcClient,
    error_codes,
};
