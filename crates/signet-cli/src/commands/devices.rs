//! Device subcommands.

use anyhow::Result;
use serde::Serialize;
use signet_gateway::rpc::CreateDeviceParams;

use crate::client::DaemonClient;
use crate::theme::Theme;
use crate::{Commands, OutputFormat};

/// Run one subcommand against the daemon and print its result.
pub(crate) async fn run(client: &DaemonClient, command: Commands, format: OutputFormat) -> Result<()> {
    match command {
        Commands::Health => {
            let health = client.health().await?;
            emit(format, &health, || Theme::success(&format!("daemon {}", health.status)))
        },
        Commands::Create {
            algorithm,
            id,
            label,
        } => {
            let device = client
                .create_device(CreateDeviceParams {
                    id,
                    algorithm,
                    label,
                })
                .await?;
            emit(format, &device, || {
                format!(
                    "{}\n{}",
                    Theme::success("device created"),
                    Theme::device(&device)
                )
            })
        },
        Commands::Get { id } => {
            let device = client.get_device(&id).await?;
            emit(format, &device, || Theme::device(&device))
        },
        Commands::List => {
            let devices = client.list_devices().await?;
            emit(format, &devices, || {
                if devices.is_empty() {
                    return Theme::dimmed("no devices");
                }
                let separator = format!("\n{}\n", Theme::separator());
                devices
                    .iter()
                    .map(Theme::device)
                    .collect::<Vec<_>>()
                    .join(separator.as_str())
            })
        },
        Commands::Sign { id, data } => {
            let result = client.sign(&id, &data).await?;
            emit(format, &result, || {
                [
                    Theme::success("signed"),
                    Theme::field("signed data", &result.signed_data),
                    Theme::field("signature", &result.signature),
                ]
                .join("\n")
            })
        },
        Commands::Verify {
            id,
            signed_data,
            signature,
        } => {
            let valid = client.verify(&id, &signed_data, &signature).await?;
            emit(format, &valid, || {
                if valid {
                    Theme::success("signature valid")
                } else {
                    Theme::error("signature invalid")
                }
            })
        },
    }
}

fn emit<T: Serialize>(format: OutputFormat, value: &T, pretty: impl FnOnce() -> String) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Pretty => println!("{}", pretty()),
    }
    Ok(())
}
