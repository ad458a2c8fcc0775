//! The device service.

use std::fmt;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use signet_core::{
    Algorithm, DeviceError, DeviceResult, IdGenerator, SignatureDevice, SignatureResult, UuidV4,
};
use signet_crypto::{DefaultSignerFactory, SignerFactory};
use signet_storage::{DeviceRepository, MemoryDeviceRepository};
use tracing::{debug, info, warn};

/// Creates devices and advances their signature chains.
///
/// All collaborators are passed in explicitly; the service holds no global
/// state, so each instance is isolated.
#[derive(Clone)]
pub struct DeviceService {
    repository: Arc<dyn DeviceRepository>,
    signers: Arc<dyn SignerFactory>,
    ids: Arc<dyn IdGenerator>,
}

impl DeviceService {
    /// Create a service over the given collaborators.
    #[must_use]
    pub fn new(
        repository: Arc<dyn DeviceRepository>,
        signers: Arc<dyn SignerFactory>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            repository,
            signers,
            ids,
        }
    }

    /// Service backed by the in-memory store, real signers and UUIDv4 ids.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryDeviceRepository::new()),
            Arc::new(DefaultSignerFactory),
            Arc::new(UuidV4),
        )
    }

    /// A fresh identifier for callers that do not supply their own.
    #[must_use]
    pub fn generate_id(&self) -> String {
        self.ids.generate()
    }

    /// Create a device bound to a new key pair.
    ///
    /// Key generation happens before the repository is touched, so a slow
    /// RSA key never holds any lock.
    ///
    /// # Errors
    ///
    /// - [`DeviceError::InvalidInput`] if `id` is empty
    /// - [`DeviceError::InvalidAlgorithm`] if `algorithm` is not `"RSA"` or
    ///   `"ECC"`; no key is generated in that case
    /// - [`DeviceError::Unexpected`] if key generation fails
    /// - [`DeviceError::AlreadyExists`] if `id` is taken
    pub fn create_device(
        &self,
        id: &str,
        algorithm: &str,
        label: &str,
    ) -> DeviceResult<SignatureDevice> {
        if id.is_empty() {
            warn!("rejected device creation with empty id");
            return Err(DeviceError::InvalidInput("device id must not be empty".into()));
        }

        let algorithm: Algorithm = algorithm.parse().inspect_err(|_| {
            warn!(device_id = %id, algorithm, "rejected unsupported algorithm");
        })?;

        let signer = self.signers.create(algorithm)?;
        let device = SignatureDevice::new(id, algorithm, label, signer.public_pem());
        self.repository.create(&device, signer)?;

        info!(device_id = %id, %algorithm, "device created");
        Ok(device)
    }

    /// Fetch a device.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotFound`] if no device has this id.
    pub fn get_device(&self, id: &str) -> DeviceResult<SignatureDevice> {
        let (device, _) = self.repository.get(id)?;
        Ok(device)
    }

    /// Every device, in no particular order.
    ///
    /// # Errors
    ///
    /// Fails only on storage infrastructure faults.
    pub fn list_devices(&self) -> DeviceResult<Vec<SignatureDevice>> {
        self.repository.list()
    }

    /// Sign `data` and advance the device's chain by one link.
    ///
    /// The signed payload is `"{counter}_{data}_{previous}"`. Counter and
    /// last signature are written only after the signer succeeds, so a
    /// failed call leaves the device exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`DeviceError::InvalidInput`] if `data` is empty
    /// - [`DeviceError::NotFound`] if no device has this id
    /// - [`DeviceError::Unexpected`] if signing fails or the counter would
    ///   overflow
    pub fn sign(&self, id: &str, data: &str) -> DeviceResult<SignatureResult> {
        if data.is_empty() {
            warn!(device_id = %id, "rejected sign request with empty data");
            return Err(DeviceError::InvalidInput("data must not be empty".into()));
        }

        let mut result = None;
        self.repository.update(id, &mut |device, signer| {
            let payload = device.next_payload(data);
            debug!(device_id = %device.id, %payload, "signing");

            let raw = signer.sign(payload.as_bytes())?;
            let counter = device
                .signature_counter
                .checked_add(1)
                .ok_or_else(|| DeviceError::unexpected("signature counter overflow"))?;

            device.last_signature = BASE64.encode(raw);
            device.signature_counter = counter;
            result = Some(SignatureResult {
                signature: device.last_signature.clone(),
                signed_data: payload,
            });
            Ok(())
        })?;

        let result = result.ok_or_else(|| DeviceError::unexpected("no signature produced"))?;
        info!(device_id = %id, "chain advanced");
        Ok(result)
    }

    /// Check a signature against the device's bound key.
    ///
    /// A signature that is not valid base64 simply fails to verify.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotFound`] if no device has this id.
    pub fn verify(&self, id: &str, signed_data: &str, signature: &str) -> DeviceResult<bool> {
        let (_, signer) = self.repository.get(id)?;
        let Ok(raw) = BASE64.decode(signature) else {
            debug!(device_id = %id, "signature is not valid base64");
            return Ok(false);
        };
        Ok(signer.verify(signed_data.as_bytes(), &raw))
    }
}

impl fmt::Debug for DeviceService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use signet_core::ErrorKind;

    use super::*;

    #[test]
    fn test_create_ecc_device() {
        let service = DeviceService::in_memory();
        let device = service.create_device("dev-1", "ECC", "till 3").unwrap();

        assert_eq!(device.algorithm, Algorithm::Ecc);
        assert_eq!(device.label, "till 3");
        assert_eq!(device.signature_counter, 0);
        assert!(device.last_signature.is_empty());
        assert!(device.public_key.starts_with("-----BEGIN PUBLIC KEY-----"));

        assert_eq!(service.get_device("dev-1").unwrap(), device);
    }

    #[test]
    fn test_create_validates_before_keygen() {
        let service = DeviceService::in_memory();

        let err = service.create_device("", "ECC", "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = service.create_device("dev-1", "DSA", "").unwrap_err();
        assert!(matches!(err, DeviceError::InvalidAlgorithm(ref alg) if alg == "DSA"));

        assert!(service.list_devices().unwrap().is_empty());
    }

    #[test]
    fn test_sign_chains_signatures() {
        let service = DeviceService::in_memory();
        service.create_device("dev-1", "ECC", "").unwrap();

        let first = service.sign("dev-1", "hello").unwrap();
        assert_eq!(first.signed_data, "0_hello_ZGV2LTE=");

        let second = service.sign("dev-1", "world").unwrap();
        assert_eq!(second.signed_data, format!("1_world_{}", first.signature));

        let device = service.get_device("dev-1").unwrap();
        assert_eq!(device.signature_counter, 2);
        assert_eq!(device.last_signature, second.signature);
    }

    #[test]
    fn test_verify_round_trip() {
        let service = DeviceService::in_memory();
        service.create_device("dev-1", "ECC", "").unwrap();
        let result = service.sign("dev-1", "hello").unwrap();

        assert!(
            service
                .verify("dev-1", &result.signed_data, &result.signature)
                .unwrap()
        );
        assert!(
            !service
                .verify("dev-1", "0_hellp_ZGV2LTE=", &result.signature)
                .unwrap()
        );
        assert!(!service.verify("dev-1", &result.signed_data, "%%%").unwrap());

        let err = service.verify("nope", "x", "y").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_generate_id_is_uuid() {
        let service = DeviceService::in_memory();
        let id = service.generate_id();
        assert_eq!(id.len(), 36);
        assert_ne!(id, service.generate_id());
    }
}
