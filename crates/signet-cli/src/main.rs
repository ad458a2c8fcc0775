//! signet CLI - client for the signet daemon.
//!
//! A thin client: every subcommand is one JSON-RPC call to a running
//! `signetd`.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod client;
mod commands;
mod theme;

use client::DaemonClient;
use theme::Theme;

/// signet - tamper-evident signature devices
#[derive(Parser, Debug)]
#[command(name = "signet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Daemon WebSocket URL
    #[arg(long, global = true, env = "SIGNET_URL", default_value = "ws://127.0.0.1:8080")]
    url: String,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Coloured, human-readable
    Pretty,
    /// Raw JSON result
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that the daemon is up
    Health,

    /// Create a signature device
    Create {
        /// Signing algorithm: RSA or ECC
        #[arg(short, long)]
        algorithm: String,

        /// Device id (generated by the daemon if omitted)
        #[arg(long)]
        id: Option<String>,

        /// Free-form label
        #[arg(short, long, default_value = "")]
        label: String,
    },

    /// Show one device
    Get {
        /// Device id
        id: String,
    },

    /// List all devices
    List,

    /// Sign data with a device, advancing its chain
    Sign {
        /// Device id
        id: String,
        /// Data to sign
        data: String,
    },

    /// Verify a signature produced by a device
    Verify {
        /// Device id
        id: String,
        /// The exact signed payload
        signed_data: String,
        /// Base64 signature
        signature: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{}", Theme::error(&format!("{e:#}")));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let client = DaemonClient::connect(&cli.url).await?;
    commands::devices::run(&client, cli.command, cli.format).await
}
