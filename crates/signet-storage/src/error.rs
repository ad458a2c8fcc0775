//! Storage error types.

use signet_core::DeviceError;

/// Errors from storage infrastructure.
///
/// Domain outcomes (missing or duplicate ids) are reported as
/// [`DeviceError`] directly; this type covers faults of the store itself.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A lock was poisoned by a panic in another caller.
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for DeviceError {
    fn from(err: StorageError) -> Self {
        DeviceError::unexpected(err)
    }
}

impl<T> From<std::sync::PoisonError<T>> for StorageError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Self::LockPoisoned(err.to_string())
    }
}
