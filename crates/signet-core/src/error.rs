//! Device error taxonomy.

use thiserror::Error;

/// Opaque lower-layer error carried by [`DeviceError::Unexpected`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by device operations.
///
/// Transports map these to their own representation (status codes, RPC
/// error codes); the core never does.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// Empty device id at creation, or empty data at sign time.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Requested algorithm is neither RSA nor ECC.
    #[error("invalid algorithm: {0}")]
    InvalidAlgorithm(String),

    /// A device with this id already exists.
    #[error("device already exists: {0}")]
    AlreadyExists(String),

    /// No device with this id exists.
    #[error("device not found: {0}")]
    NotFound(String),

    /// Key generation, signing, or storage infrastructure failure.
    #[error("unexpected error: {0}")]
    Unexpected(#[source] BoxError),
}

impl DeviceError {
    /// Wrap a lower-layer failure.
    pub fn unexpected(err: impl Into<BoxError>) -> Self {
        Self::Unexpected(err.into())
    }

    /// The kind of this error, without its payload.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::InvalidAlgorithm(_) => ErrorKind::InvalidAlgorithm,
            Self::AlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}

/// Payload-free discriminant of [`DeviceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`DeviceError::InvalidInput`].
    InvalidInput,
    /// See [`DeviceError::InvalidAlgorithm`].
    InvalidAlgorithm,
    /// See [`DeviceError::AlreadyExists`].
    AlreadyExists,
    /// See [`DeviceError::NotFound`].
    NotFound,
    /// See [`DeviceError::Unexpected`].
    Unexpected,
}

/// Result type for device operations.
pub type DeviceResult<T> = Result<T, DeviceError>;
