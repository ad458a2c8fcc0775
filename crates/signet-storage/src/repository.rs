//! The repository contract.

use signet_core::{DeviceResult, SignatureDevice};
use signet_crypto::{SharedSigner, Signer};

/// Read-modify-write step run inside a device's critical section.
///
/// Receives the live stored record, not a copy. Whatever it has written
/// when it returns is the device's new state, whether it returns `Ok` or
/// `Err`; a mutator must only write after its own fallible work succeeds.
pub type Mutator<'a> = dyn FnMut(&mut SignatureDevice, &dyn Signer) -> DeviceResult<()> + 'a;

/// Authoritative store of devices and their bound signers.
///
/// Alternative stores (durable, remote) must reproduce this contract
/// exactly, including that `update` hands the mutator the live record and
/// that updates to different ids do not block each other.
pub trait DeviceRepository: Send + Sync {
    /// Insert a new device paired with `signer`.
    ///
    /// The store keeps its own copy of `device`.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::AlreadyExists`](signet_core::DeviceError::AlreadyExists)
    /// if the id is taken, leaving the existing record untouched.
    fn create(&self, device: &SignatureDevice, signer: SharedSigner) -> DeviceResult<()>;

    /// Fetch a copy of a device and a handle to its signer.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotFound`](signet_core::DeviceError::NotFound)
    /// if no device has this id.
    fn get(&self, id: &str) -> DeviceResult<(SignatureDevice, SharedSigner)>;

    /// Snapshot of every device, in no particular order.
    ///
    /// # Errors
    ///
    /// Fails only on infrastructure faults.
    fn list(&self) -> DeviceResult<Vec<SignatureDevice>>;

    /// Run `mutator` on the live record under an exclusive per-device lock.
    ///
    /// The mutator's error is propagated unchanged and nothing it wrote is
    /// undone.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotFound`](signet_core::DeviceError::NotFound)
    /// if no device has this id, or whatever the mutator returns.
    fn update(&self, id: &str, mutator: &mut Mutator<'_>) -> DeviceResult<()>;
}
