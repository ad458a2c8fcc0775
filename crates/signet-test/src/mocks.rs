//! Fake signers, factories and id generators.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use sha2::{Digest, Sha256};
use signet_core::{Algorithm, IdGenerator};
use signet_crypto::{CryptoError, CryptoResult, SharedSigner, Signer, SignerFactory};

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

fn fake_pem(algorithm: Algorithm, key: u64) -> String {
    let label = match algorithm {
        Algorithm::Rsa => "RSA PUBLIC KEY",
        Algorithm::Ecc => "PUBLIC KEY",
    };
    let body = BASE64.encode(format!("fake-{algorithm}-key-{key}"));
    format!("-----BEGIN {label}-----\n{body}\n-----END {label}-----\n")
}

/// Signer whose signatures are `SHA-256(key || payload)`.
///
/// Fast and deterministic. Every instance gets its own key, so two devices
/// never produce the same signature for the same payload.
#[derive(Debug)]
pub struct FakeSigner {
    algorithm: Algorithm,
    key: u64,
    public_pem: String,
}

impl FakeSigner {
    /// Create a fake signer claiming `algorithm`.
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        let key = NEXT_KEY.fetch_add(1, Ordering::Relaxed);
        Self {
            algorithm,
            key,
            public_pem: fake_pem(algorithm, key),
        }
    }

    fn digest(&self, payload: &[u8]) -> Vec<u8> {
        Sha256::new()
            .chain_update(self.key.to_be_bytes())
            .chain_update(payload)
            .finalize()
            .to_vec()
    }
}

impl Signer for FakeSigner {
    fn sign(&self, payload: &[u8]) -> CryptoResult<Vec<u8>> {
        Ok(self.digest(payload))
    }

    fn verify(&self, payload: &[u8], signature: &[u8]) -> bool {
        self.digest(payload) == signature
    }

    fn public_pem(&self) -> &str {
        &self.public_pem
    }

    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

/// Signer that succeeds a fixed number of times, then always fails.
#[derive(Debug)]
pub struct FailingSigner {
    inner: FakeSigner,
    remaining: AtomicU64,
}

impl FailingSigner {
    /// A signer that signs `successes` payloads before failing.
    #[must_use]
    pub fn after(algorithm: Algorithm, successes: u64) -> Self {
        Self {
            inner: FakeSigner::new(algorithm),
            remaining: AtomicU64::new(successes),
        }
    }
}

impl Signer for FailingSigner {
    fn sign(&self, payload: &[u8]) -> CryptoResult<Vec<u8>> {
        let granted = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if granted {
            self.inner.sign(payload)
        } else {
            Err(CryptoError::Signing("fake signer failure".into()))
        }
    }

    fn verify(&self, payload: &[u8], signature: &[u8]) -> bool {
        self.inner.verify(payload, signature)
    }

    fn public_pem(&self) -> &str {
        self.inner.public_pem()
    }

    fn algorithm(&self) -> Algorithm {
        self.inner.algorithm()
    }
}

/// Signer that panics inside its first `sign` call and behaves like a
/// [`FakeSigner`] afterwards.
#[derive(Debug)]
pub struct PanicOnceSigner {
    inner: FakeSigner,
    armed: AtomicBool,
}

impl PanicOnceSigner {
    /// Create an armed signer claiming `algorithm`.
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            inner: FakeSigner::new(algorithm),
            armed: AtomicBool::new(true),
        }
    }
}

impl Signer for PanicOnceSigner {
    fn sign(&self, payload: &[u8]) -> CryptoResult<Vec<u8>> {
        if self.armed.swap(false, Ordering::SeqCst) {
            panic!("signer panicked");
        }
        self.inner.sign(payload)
    }

    fn verify(&self, payload: &[u8], signature: &[u8]) -> bool {
        self.inner.verify(payload, signature)
    }

    fn public_pem(&self) -> &str {
        self.inner.public_pem()
    }

    fn algorithm(&self) -> Algorithm {
        self.inner.algorithm()
    }
}

/// Factory handing out [`FakeSigner`]s and counting its calls.
#[derive(Debug, Default)]
pub struct FakeSignerFactory {
    calls: AtomicUsize,
}

impl FakeSignerFactory {
    /// Create a new factory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of signers created so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SignerFactory for FakeSignerFactory {
    fn create(&self, algorithm: Algorithm) -> CryptoResult<SharedSigner> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(FakeSigner::new(algorithm)))
    }
}

/// Factory that fails at key generation or hands out failing signers.
#[derive(Debug, Clone, Copy)]
pub enum FailingSignerFactory {
    /// `create` itself fails.
    KeyGeneration,
    /// `create` succeeds; the signer fails after this many signatures.
    SigningAfter(u64),
    /// `create` succeeds; the signer panics on its first signature only.
    PanicOnFirstSign,
}

impl SignerFactory for FailingSignerFactory {
    fn create(&self, algorithm: Algorithm) -> CryptoResult<SharedSigner> {
        match *self {
            Self::KeyGeneration => Err(CryptoError::KeyGeneration(
                "fake key generation failure".into(),
            )),
            Self::SigningAfter(successes) => {
                Ok(Arc::new(FailingSigner::after(algorithm, successes)))
            },
            Self::PanicOnFirstSign => Ok(Arc::new(PanicOnceSigner::new(algorithm))),
        }
    }
}

/// Deterministic ids: `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug)]
pub struct SequenceIds {
    prefix: String,
    next: AtomicU64,
}

impl SequenceIds {
    /// Create a generator starting at `{prefix}-1`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequenceIds {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{}-{n}", self.prefix)
    }
}
