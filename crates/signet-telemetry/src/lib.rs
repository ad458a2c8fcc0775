//! Signet Telemetry - Logging for signet binaries.
//!
//! Libraries in this workspace only emit `tracing` events; binaries call
//! [`setup_logging`] once at startup to install a subscriber.
//!
//! # Example
//!
//! ```rust,no_run
//! use signet_telemetry::{LogConfig, LogFormat, setup_logging};
//!
//! # fn main() -> Result<(), signet_telemetry::TelemetryError> {
//! let config = LogConfig::new("info")
//!     .with_format(LogFormat::Json)
//!     .with_directive("signet_storage=trace");
//!
//! setup_logging(&config)?;
//! tracing::info!("daemon starting");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod prelude;

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{LogConfig, LogFormat, LogTarget, setup_logging};
