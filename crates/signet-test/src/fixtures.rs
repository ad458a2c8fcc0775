//! Pre-wired services for tests.

use std::sync::Arc;

use signet_crypto::SignerFactory;
use signet_service::DeviceService;
use signet_storage::MemoryDeviceRepository;

use crate::mocks::{FakeSignerFactory, SequenceIds};

/// Service over an empty in-memory store, [`FakeSignerFactory`] and
/// [`SequenceIds`] with prefix `dev`.
#[must_use]
pub fn fake_service() -> DeviceService {
    fake_service_with(Arc::new(FakeSignerFactory::new()))
}

/// Service over an empty in-memory store using the given signer factory.
#[must_use]
pub fn fake_service_with(signers: Arc<dyn SignerFactory>) -> DeviceService {
    DeviceService::new(
        Arc::new(MemoryDeviceRepository::new()),
        signers,
        Arc::new(SequenceIds::new("dev")),
    )
}
