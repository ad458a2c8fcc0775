//! Gateway error types.

use thiserror::Error;

/// Errors from starting the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The listen address could not be bound.
    #[error("failed to bind {addr}: {message}")]
    Bind {
        /// Requested address.
        addr: String,
        /// Underlying error.
        message: String,
    },

    /// Any other server runtime failure.
    #[error("gateway error: {0}")]
    Runtime(String),
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;
