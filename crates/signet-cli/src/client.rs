//! Daemon client: connects the CLI to a running `signetd` via `WebSocket`.

use std::time::Duration;

use jsonrpsee::ws_client::{WsClient, WsClientBuilder};
use signet_core::{SignatureDevice, SignatureResult};
use signet_gateway::rpc::{CreateDeviceParams, HealthStatus, SignetRpcClient};

/// A client connected to the signet daemon.
pub(crate) struct DaemonClient {
    client: WsClient,
}

impl DaemonClient {
    /// Connect to the daemon at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the daemon cannot be reached.
    pub(crate) async fn connect(url: &str) -> anyhow::Result<Self> {
        let client = WsClientBuilder::default()
            .connection_timeout(Duration::from_secs(5))
            .build(url)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to connect to daemon at {url}: {e}"))?;

        Ok(Self { client })
    }

    pub(crate) async fn health(&self) -> anyhow::Result<HealthStatus> {
        Ok(self.client.health().await?)
    }

    pub(crate) async fn create_device(
        &self,
        params: CreateDeviceParams,
    ) -> anyhow::Result<SignatureDevice> {
        Ok(self.client.create_device(params).await?)
    }

    pub(crate) async fn get_device(&self, id: &str) -> anyhow::Result<SignatureDevice> {
        Ok(self.client.get_device(id.to_owned()).await?)
    }

    pub(crate) async fn list_devices(&self) -> anyhow::Result<Vec<SignatureDevice>> {
        Ok(self.client.list_devices().await?)
    }

    pub(crate) async fn sign(&self, id: &str, data: &str) -> anyhow::Result<SignatureResult> {
        Ok(self
            .client
            .sign_transaction(id.to_owned(), data.to_owned())
            .await?)
    }

    pub(crate) async fn verify(
        &self,
        id: &str,
        signed_data: &str,
        signature: &str,
    ) -> anyhow::Result<bool> {
        Ok(self
            .client
            .verify_signature(id.to_owned(), signed_data.to_owned(), signature.to_owned())
            .await?)
    }
}
