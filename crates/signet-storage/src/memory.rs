//! In-memory reference store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use signet_core::{DeviceError, DeviceResult, SignatureDevice};
use signet_crypto::SharedSigner;
use tracing::{debug, trace};

use crate::error::StorageResult;
use crate::repository::{DeviceRepository, Mutator};

/// A stored device: its live state and the signer it is bound to.
#[derive(Debug)]
struct Record {
    live: Mutex<SignatureDevice>,
    signer: SharedSigner,
}

/// Table entry: the last published snapshot plus the record itself.
#[derive(Debug)]
struct Entry {
    snapshot: SignatureDevice,
    record: Arc<Record>,
}

/// In-memory device store.
///
/// Devices live as long as the store. There is no on-disk format.
#[derive(Debug, Default)]
pub struct MemoryDeviceRepository {
    table: RwLock<HashMap<String, Entry>>,
}

impl MemoryDeviceRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StorageResult<RwLockReadGuard<'_, HashMap<String, Entry>>> {
        Ok(self.table.read()?)
    }

    fn write(&self) -> StorageResult<RwLockWriteGuard<'_, HashMap<String, Entry>>> {
        Ok(self.table.write()?)
    }
}

impl DeviceRepository for MemoryDeviceRepository {
    fn create(&self, device: &SignatureDevice, signer: SharedSigner) -> DeviceResult<()> {
        let mut table = self.write()?;
        if table.contains_key(&device.id) {
            return Err(DeviceError::AlreadyExists(device.id.clone()));
        }

        let record = Arc::new(Record {
            live: Mutex::new(device.clone()),
            signer,
        });
        table.insert(
            device.id.clone(),
            Entry {
                snapshot: device.clone(),
                record,
            },
        );
        debug!(device_id = %device.id, devices = table.len(), "device stored");
        Ok(())
    }

    fn get(&self, id: &str) -> DeviceResult<(SignatureDevice, SharedSigner)> {
        let table = self.read()?;
        let entry = table
            .get(id)
            .ok_or_else(|| DeviceError::NotFound(id.to_owned()))?;
        Ok((entry.snapshot.clone(), Arc::clone(&entry.record.signer)))
    }

    fn list(&self) -> DeviceResult<Vec<SignatureDevice>> {
        let table = self.read()?;
        Ok(table.values().map(|entry| entry.snapshot.clone()).collect())
    }

    fn update(&self, id: &str, mutator: &mut Mutator<'_>) -> DeviceResult<()> {
        // Table lock covers the lookup only.
        let record = {
            let table = self.read()?;
            let entry = table
                .get(id)
                .ok_or_else(|| DeviceError::NotFound(id.to_owned()))?;
            Arc::clone(&entry.record)
        };

        // A mutator that panicked wrote nothing before its fallible step, so
        // the record behind a poisoned lock is still consistent.
        let mut live = record.live.lock().unwrap_or_else(PoisonError::into_inner);
        trace!(device_id = %id, "record locked");
        let outcome = mutator(&mut *live, record.signer.as_ref());

        // Publish while still holding the record lock so snapshots never go
        // backwards. Publication must not fail once the mutator has run.
        let snapshot = live.clone();
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = table.get_mut(id) {
            entry.snapshot = snapshot;
        }
        drop(table);
        drop(live);

        outcome
    }
}
