//! RPC implementation and server lifecycle.

use std::net::SocketAddr;

use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::types::ErrorObjectOwned;
use signet_core::{DeviceError, DeviceResult, ErrorKind, SignatureDevice, SignatureResult};
use signet_service::DeviceService;
use tracing::{debug, error, info};

use crate::error::{GatewayError, GatewayResult};
use crate::rpc::{CreateDeviceParams, HealthStatus, SignetRpcServer, error_codes};

/// The jsonrpsee method handler.
struct RpcImpl {
    service: DeviceService,
}

/// Map a device error kind to its RPC error code.
fn code_for(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::NotFound => error_codes::NOT_FOUND,
        ErrorKind::AlreadyExists => error_codes::ALREADY_EXISTS,
        ErrorKind::InvalidInput => error_codes::INVALID_INPUT,
        ErrorKind::InvalidAlgorithm => error_codes::INVALID_ALGORITHM,
        ErrorKind::Unexpected => error_codes::UNEXPECTED,
    }
}

fn to_rpc_error(method: &'static str, err: &DeviceError) -> ErrorObjectOwned {
    if err.kind() == ErrorKind::Unexpected {
        error!(method, error = %err, "operation failed");
    } else {
        debug!(method, error = %err, "operation rejected");
    }
    ErrorObjectOwned::owned(code_for(err.kind()), err.to_string(), None::<()>)
}

/// Run a device operation on the blocking pool, containing panics.
async fn run_blocking<T, F>(
    service: &DeviceService,
    method: &'static str,
    op: F,
) -> Result<T, ErrorObjectOwned>
where
    T: Send + 'static,
    F: FnOnce(&DeviceService) -> DeviceResult<T> + Send + 'static,
{
    let service = service.clone();
    match tokio::task::spawn_blocking(move || op(&service)).await {
        Ok(result) => result.map_err(|e| to_rpc_error(method, &e)),
        Err(join_err) => {
            error!(method, error = %join_err, "operation panicked");
            Err(ErrorObjectOwned::owned(
                error_codes::UNEXPECTED,
                "internal error",
                None::<()>,
            ))
        },
    }
}

#[jsonrpsee::core::async_trait]
impl SignetRpcServer for RpcImpl {
    async fn health(&self) -> Result<HealthStatus, ErrorObjectOwned> {
        Ok(HealthStatus {
            status: "ok".to_owned(),
        })
    }

    async fn create_device(
        &self,
        params: CreateDeviceParams,
    ) -> Result<SignatureDevice, ErrorObjectOwned> {
        run_blocking(&self.service, "createDevice", move |service| {
            let id = params.id.unwrap_or_else(|| service.generate_id());
            service.create_device(&id, &params.algorithm, &params.label)
        })
        .await
    }

    async fn get_device(&self, id: String) -> Result<SignatureDevice, ErrorObjectOwned> {
        run_blocking(&self.service, "getDevice", move |service| {
            service.get_device(&id)
        })
        .await
    }

    async fn list_devices(&self) -> Result<Vec<SignatureDevice>, ErrorObjectOwned> {
        run_blocking(&self.service, "listDevices", DeviceService::list_devices).await
    }

    async fn sign_transaction(
        &self,
        id: String,
        data: String,
    ) -> Result<SignatureResult, ErrorObjectOwned> {
        run_blocking(&self.service, "signTransaction", move |service| {
            service.sign(&id, &data)
        })
        .await
    }

    async fn verify_signature(
        &self,
        id: String,
        signed_data: String,
        signature: String,
    ) -> Result<bool, ErrorObjectOwned> {
        run_blocking(&self.service, "verifySignature", move |service| {
            service.verify(&id, &signed_data, &signature)
        })
        .await
    }
}

/// Entry points for serving the RPC API.
#[derive(Debug)]
pub struct GatewayServer;

impl GatewayServer {
    /// Bind `addr`, start serving, and return the handle and bound address.
    ///
    /// Bind to port 0 to let the OS pick a free port.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Bind`] if the address cannot be bound.
    pub async fn start(
        addr: &str,
        service: DeviceService,
    ) -> GatewayResult<(ServerHandle, SocketAddr)> {
        let server = Server::builder()
            .build(addr)
            .await
            .map_err(|e| GatewayError::Bind {
                addr: addr.to_owned(),
                message: e.to_string(),
            })?;

        let local_addr = server
            .local_addr()
            .map_err(|e| GatewayError::Runtime(format!("Failed to get address: {e}")))?;

        let handle = server.start(RpcImpl { service }.into_rpc());
        info!(addr = %local_addr, "gateway listening");
        Ok((handle, local_addr))
    }

    /// Build the RPC module without serving it.
    ///
    /// Returns the registered method names.
    #[must_use]
    pub fn build_only(service: DeviceService) -> Vec<&'static str> {
        let module = RpcImpl { service }.into_rpc();
        module.method_names().collect()
    }
}
