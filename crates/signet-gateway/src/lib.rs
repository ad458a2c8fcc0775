//! Signet Gateway - JSON-RPC over WebSocket in front of the device service.
//!
//! Methods live in the `signet` namespace (`signet_createDevice`,
//! `signet_signTransaction`, ...). Device operations are synchronous and may
//! generate RSA keys, so every call runs on Tokio's blocking pool. A panic
//! inside an operation is reported to the caller as
//! [`error_codes::UNEXPECTED`] and never takes the server down.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;
pub mod rpc;

mod error;
mod server;

pub use error::{GatewayError, GatewayResult};
pub use rpc::{CreateDeviceParams, HealthStatus, SignetRpcClient, SignetRpcServer, error_codes};
pub use server::GatewayServer;
