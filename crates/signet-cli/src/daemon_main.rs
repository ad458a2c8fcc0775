//! `signetd`, the signet signing daemon.
//!
//! Loads configuration, wires the in-memory device store, real signers and
//! UUIDv4 ids into a `DeviceService`, and serves it over JSON-RPC until
//! Ctrl-C.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use signet_config::Config;
use signet_gateway::GatewayServer;
use signet_service::DeviceService;
use signet_telemetry::{LogConfig, LogFormat};
use tracing::info;

/// signet daemon: issues signature devices and signs transactions.
#[derive(Parser, Debug)]
#[command(name = "signetd")]
#[command(author, version, about = "signet daemon: tamper-evident signature devices")]
struct Args {
    /// Address to listen on (overrides config).
    #[arg(short, long)]
    listen: Option<String>,

    /// Path to a configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Load config and build the service, then exit without serving.
    #[arg(short = 't', long)]
    check: bool,

    /// Enable debug logging (overrides config).
    #[arg(short, long)]
    verbose: bool,

    /// Log format: pretty, compact or json (overrides config).
    #[arg(long)]
    log_format: Option<String>,
}

/// Apply command-line flags on top of the loaded configuration.
fn apply_flags(mut config: Config, args: &Args) -> signet_config::ConfigResult<Config> {
    if let Some(listen) = &args.listen {
        config.server.listen_addr.clone_from(listen);
    }
    if args.verbose {
        config.logging.level = "debug".to_owned();
    }
    if let Some(format) = &args.log_format {
        config.logging.format.clone_from(format);
    }
    signet_config::validate::validate(&config)?;
    Ok(config)
}

fn log_config(config: &Config) -> Result<LogConfig> {
    let format: LogFormat = config.logging.format.parse()?;
    let mut log = LogConfig::new(config.logging.level.clone()).with_format(format);
    for directive in &config.logging.directives {
        log = log.with_directive(directive.clone());
    }
    Ok(log)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let resolved = Config::load(args.config.as_deref()).context("failed to load configuration")?;
    let config = apply_flags(resolved.config, &args).context("invalid command-line override")?;

    if let Err(e) = signet_telemetry::setup_logging(&log_config(&config)?) {
        eprintln!("Failed to initialize logging: {e}");
    }
    for file in &resolved.loaded_files {
        info!(path = %file, "configuration file applied");
    }

    let service = DeviceService::in_memory();

    if args.check {
        let methods = GatewayServer::build_only(service);
        println!(
            "{}",
            format!(
                "configuration ok: would listen on {} with {} methods",
                config.server.listen_addr,
                methods.len()
            )
            .green()
        );
        return Ok(());
    }

    let (handle, addr) = GatewayServer::start(&config.server.listen_addr, service).await?;
    println!("{}", format!("signetd listening on ws://{addr}").cyan().bold());

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl-C")?;

    println!("\n{}", "Shutting down daemon...".yellow());
    handle.stop()?;
    handle.stopped().await;

    println!("{}", "Daemon stopped".green().bold());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["signetd"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_flags_override_config() {
        let config = apply_flags(
            Config::default(),
            &args(&["--listen", "0.0.0.0:9000", "--verbose", "--log-format", "json"]),
        )
        .unwrap();

        assert_eq!(config.server.listen_addr, "0.0.0.0:9000");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let config = apply_flags(Config::default(), &args(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_flag_value_rejected() {
        let result = apply_flags(Config::default(), &args(&["--listen", "nowhere"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_check_flag_short_form() {
        assert!(args(&["-t"]).check);
    }

    #[test]
    fn test_log_config_from_config() {
        let mut config = Config::default();
        config.logging.format = "pretty".to_owned();
        config.logging.directives = vec!["signet_storage=trace".to_owned()];

        let log = log_config(&config).unwrap();
        assert_eq!(log.format, LogFormat::Pretty);
        assert_eq!(log.directives, ["signet_storage=trace"]);
    }
}
