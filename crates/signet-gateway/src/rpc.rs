//! JSON-RPC API definition for daemon ↔ client communication.
//!
//! Uses jsonrpsee proc macros to define the RPC interface.
//! The daemon implements the server side; the `signet` CLI implements the
//! client side.

use jsonrpsee::proc_macros::rpc;
use jsonrpsee::types::ErrorObjectOwned;
use serde::{Deserialize, Serialize};
use signet_core::{SignatureDevice, SignatureResult};

// ---------- Wire types ----------

/// Liveness report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `"ok"` while the daemon serves requests.
    pub status: String,
}

/// Parameters of `signet_createDevice`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDeviceParams {
    /// Device id. When absent the daemon generates a UUIDv4; an empty
    /// string is rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `"RSA"` or `"ECC"`.
    pub algorithm: String,
    /// Free-form label.
    #[serde(default)]
    pub label: String,
}

// ---------- RPC API ----------

/// The signet daemon RPC API.
///
/// Implemented by the daemon (server side).
/// Called by the CLI (client side).
#[rpc(server, client, namespace = "signet")]
pub trait SignetRpc {
    /// Liveness check.
    #[method(name = "health")]
    async fn health(&self) -> Result<HealthStatus, ErrorObjectOwned>;

    /// Create a device bound to a fresh key pair.
    #[method(name = "createDevice")]
    async fn create_device(
        &self,
        params: CreateDeviceParams,
    ) -> Result<SignatureDevice, ErrorObjectOwned>;

    /// Fetch one device.
    #[method(name = "getDevice")]
    async fn get_device(&self, id: String) -> Result<SignatureDevice, ErrorObjectOwned>;

    /// List every device.
    #[method(name = "listDevices")]
    async fn list_devices(&self) -> Result<Vec<SignatureDevice>, ErrorObjectOwned>;

    /// Sign `data` with a device, advancing its chain.
    #[method(name = "signTransaction")]
    async fn sign_transaction(
        &self,
        id: String,
        data: String,
    ) -> Result<SignatureResult, ErrorObjectOwned>;

    /// Check a base64 signature over `signed_data` with a device's key.
    #[method(name = "verifySignature")]
    async fn verify_signature(
        &self,
        id: String,
        signed_data: String,
        signature: String,
    ) -> Result<bool, ErrorObjectOwned>;
}

/// Error codes for the RPC API.
pub mod error_codes {
    /// Device not found.
    pub const NOT_FOUND: i32 = -32001;
    /// Device already exists.
    pub const ALREADY_EXISTS: i32 = -32002;
    /// Empty id or empty data.
    pub const INVALID_INPUT: i32 = -32003;
    /// Algorithm is neither RSA nor ECC.
    pub const INVALID_ALGORITHM: i32 = -32004;
    /// Key generation, signing or storage failure, or a contained panic.
    pub const UNEXPECTED: i32 = -32005;
}
